use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use saju_almanac::{LunarDate, LunarTable, TableAlmanac, TermTable};
use saju_core::{
    BirthInput, CalendarKind, ChartConfig, Gender, HiddenStemTally, LateZiRule, SajuChart,
    SipsinScope, cast_chart,
};
use saju_ganji::{Ganji, ganji_at, split_ganji};
use saju_time::{CivilDate, CivilDateTime};

#[derive(Parser)]
#[command(name = "saju", about = "Four-Pillars chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a ganji cycle entry from an index (0-59) or hanja text
    Ganji {
        /// Cycle index like "41", or a pair like "甲子"
        value: String,
    },
    /// Derive a full chart for a birth datetime
    Chart {
        /// Birth datetime (local clock), YYYY-MM-DDThh:mm:ss
        datetime: String,
        /// Read the date on the lunar calendar
        #[arg(long)]
        lunar: bool,
        /// The lunar month is the intercalary repetition
        #[arg(long)]
        leap: bool,
        /// UTC offset of the birth clock in minutes
        #[arg(long, default_value = "540")]
        utc_offset: i32,
        /// Birthplace longitude in degrees east
        #[arg(long)]
        longitude: Option<f64>,
        /// Shift the clock to true solar time (requires --longitude)
        #[arg(long)]
        true_solar_time: bool,
        /// male or female; enables luck pillars
        #[arg(long)]
        gender: Option<String>,
        /// Keep the day pillar until midnight for 23:00 births
        #[arg(long)]
        late_zi_same_day: bool,
        /// Tally hidden stems in the element balance
        #[arg(long)]
        hidden_weights: bool,
        /// Label hidden stems with Ten-Gods categories
        #[arg(long)]
        hidden_sipsin: bool,
        /// Path to the solar-term table
        #[arg(long)]
        terms: PathBuf,
        /// Path to the lunar month table
        #[arg(long)]
        lunar_table: PathBuf,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the solar-term entries of a year
    Terms {
        year: i32,
        /// Path to the solar-term table
        #[arg(long)]
        terms: PathBuf,
    },
    /// Convert a lunar date to its solar equivalent
    LunarToSolar {
        year: i32,
        month: u32,
        day: u32,
        /// The month is the intercalary repetition
        #[arg(long)]
        leap: bool,
        /// Path to the lunar month table
        #[arg(long)]
        lunar_table: PathBuf,
    },
    /// Convert a solar date to its lunar equivalent
    SolarToLunar {
        year: i32,
        month: u32,
        day: u32,
        /// Path to the lunar month table
        #[arg(long)]
        lunar_table: PathBuf,
    },
}

fn parse_local(s: &str) -> Result<(i32, u32, u32, u32, u32, u32), String> {
    // Parse "YYYY-MM-DDThh:mm:ss"
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ss, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: u32 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day, hour, minute, second))
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male, female");
            std::process::exit(1);
        }
    }
}

fn load_almanac(terms: &Path, lunar: &Path) -> TableAlmanac {
    TableAlmanac::load(terms, lunar).unwrap_or_else(|e| {
        eprintln!("Failed to load almanac tables: {e}");
        std::process::exit(1);
    })
}

fn load_term_table(path: &Path) -> TermTable {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    TermTable::parse(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse term table: {e}");
        std::process::exit(1);
    })
}

fn load_lunar_table(path: &Path) -> LunarTable {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    LunarTable::parse(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse lunar table: {e}");
        std::process::exit(1);
    })
}

fn print_ganji(label: &str, ganji: Ganji) {
    println!(
        "{label:6} {} ({}, index {})",
        ganji,
        ganji.name(),
        ganji.cycle_index()
    );
}

fn print_chart(chart: &SajuChart) {
    println!(
        "Birth (local solar): {} UTC{:+}",
        chart.birth_local,
        chart.utc_offset_minutes as f64 / 60.0
    );
    print_ganji("year", chart.pillars.year);
    print_ganji("month", chart.pillars.month);
    print_ganji("day", chart.pillars.day);
    print_ganji("hour", chart.pillars.hour);
    println!(
        "Zodiac animal: {}",
        chart.pillars.year.branch().animal()
    );

    print!("Balance:");
    for element in saju_ganji::ALL_ELEMENTS {
        print!(" {}={}", element.name(), chart.balance.count(element));
        if let Some(w) = chart.balance.hidden_weight(element) {
            print!("(+{w})");
        }
    }
    println!();

    println!("Ten Gods:");
    for entry in &chart.sipsin {
        println!(
            "  {:5} {:6} {} -> {} ({})",
            entry.pillar.name(),
            format!("{:?}", entry.place).to_lowercase(),
            entry.stem.hanja(),
            entry.sipsin.name(),
            entry.sipsin.hanja()
        );
    }

    if let Some(luck) = &chart.luck {
        println!("Luck pillars:");
        for pillar in luck {
            println!("  age {:3} {}", pillar.start_age, pillar.ganji);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ganji { value } => {
            let ganji = match value.parse::<u8>() {
                Ok(index) if index < 60 => ganji_at(index),
                Ok(index) => {
                    eprintln!("Invalid cycle index: {index} (0-59)");
                    std::process::exit(1);
                }
                Err(_) => split_ganji(&value).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                }),
            };
            print_ganji("ganji", ganji);
            println!(
                "stem   {} ({}, {}, {})",
                ganji.stem().hanja(),
                ganji.stem().name(),
                ganji.stem().element().name(),
                ganji.stem().polarity().name()
            );
            println!(
                "branch {} ({}, {}, {})",
                ganji.branch().hanja(),
                ganji.branch().name(),
                ganji.branch().element().name(),
                ganji.branch().animal()
            );
        }

        Commands::Chart {
            datetime,
            lunar,
            leap,
            utc_offset,
            longitude,
            true_solar_time,
            gender,
            late_zi_same_day,
            hidden_weights,
            hidden_sipsin,
            terms,
            lunar_table,
            json,
        } => {
            let (year, month, day, hour, minute, second) =
                parse_local(&datetime).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            let almanac = load_almanac(&terms, &lunar_table);
            let input = BirthInput {
                calendar: if lunar {
                    CalendarKind::Lunar { leap }
                } else {
                    CalendarKind::Solar
                },
                year,
                month,
                day,
                hour,
                minute,
                second,
                utc_offset_minutes: utc_offset,
                longitude_deg: longitude,
                gender: gender.as_deref().map(parse_gender),
            };
            let config = ChartConfig {
                late_zi: if late_zi_same_day {
                    LateZiRule::SameDay
                } else {
                    LateZiRule::NextDay
                },
                hidden_tally: if hidden_weights {
                    HiddenStemTally::Weighted
                } else {
                    HiddenStemTally::VisibleOnly
                },
                sipsin_scope: if hidden_sipsin {
                    SipsinScope::WithHidden
                } else {
                    SipsinScope::VisibleOnly
                },
                true_solar_time,
            };
            let chart = cast_chart(&almanac, &input, &config).unwrap_or_else(|e| {
                eprintln!("Chart derivation failed: {e}");
                std::process::exit(1);
            });
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("JSON encoding failed: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Terms { year, terms } => {
            let table = load_term_table(&terms);
            let mut found = false;
            for event in table.events().iter().filter(|e| e.year == year) {
                let utc = CivilDateTime::from_instant(event.instant, 0);
                println!(
                    "{:13} {} UTC  month-branch {}",
                    event.term.name(),
                    utc,
                    event.month_branch().hanja()
                );
                found = true;
            }
            if !found {
                eprintln!("No entries for year {year} in the table");
                std::process::exit(1);
            }
        }

        Commands::LunarToSolar {
            year,
            month,
            day,
            leap,
            lunar_table,
        } => {
            let table = load_lunar_table(&lunar_table);
            let lunar = LunarDate {
                year,
                month,
                day,
                leap,
            };
            match table.lunar_to_solar(lunar) {
                Ok(solar) => println!("{lunar} -> {solar}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::SolarToLunar {
            year,
            month,
            day,
            lunar_table,
        } => {
            let table = load_lunar_table(&lunar_table);
            let solar = CivilDate::new(year, month, day).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            match table.solar_to_lunar(solar) {
                Ok(lunar) => println!("{solar} -> {lunar}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
