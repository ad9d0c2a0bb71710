//! Hidden-stem (Jijanggan) day-weight tables.
//!
//! Each branch conceals one to three stems, each governing a fixed number
//! of days of the 30-day lunar-month partition: the incoming breath
//! (yeogi), the middle breath (junggi, absent for the four cardinal
//! branches), and the principal breath (jeonggi, always last). The table
//! follows the uniform 30-day convention printed in Korean myeongnihak
//! primers.

use crate::branch::Branch;
use crate::stem::Stem;

/// Day-weight total every branch's hidden stems partition.
pub const HIDDEN_WEIGHT_TOTAL: u32 = 30;

/// Ordered hidden stems of a branch with their day weights.
///
/// The last entry is always the principal (jeonggi) stem.
pub const fn hidden_stems(branch: Branch) -> &'static [(Stem, u8)] {
    match branch {
        Branch::Ja => &[(Stem::Im, 10), (Stem::Gye, 20)],
        Branch::Chuk => &[(Stem::Gye, 9), (Stem::Sin, 3), (Stem::Gi, 18)],
        Branch::In => &[(Stem::Mu, 7), (Stem::Byeong, 7), (Stem::Gap, 16)],
        Branch::Myo => &[(Stem::Gap, 10), (Stem::Eul, 20)],
        Branch::Jin => &[(Stem::Eul, 9), (Stem::Gye, 3), (Stem::Mu, 18)],
        Branch::Sa => &[(Stem::Mu, 7), (Stem::Gyeong, 7), (Stem::Byeong, 16)],
        Branch::O => &[(Stem::Byeong, 10), (Stem::Gi, 9), (Stem::Jeong, 11)],
        Branch::Mi => &[(Stem::Jeong, 9), (Stem::Eul, 3), (Stem::Gi, 18)],
        Branch::Sin => &[(Stem::Mu, 7), (Stem::Im, 7), (Stem::Gyeong, 16)],
        Branch::Yu => &[(Stem::Gyeong, 10), (Stem::Sin, 20)],
        Branch::Sul => &[(Stem::Sin, 9), (Stem::Jeong, 3), (Stem::Mu, 18)],
        Branch::Hae => &[(Stem::Mu, 7), (Stem::Gap, 7), (Stem::Im, 16)],
    }
}

/// The principal (jeonggi) hidden stem of a branch, used when a branch
/// stands in for a single stem in relational derivations.
pub const fn principal_stem(branch: Branch) -> Stem {
    let table = hidden_stems(branch);
    table[table.len() - 1].0
}
