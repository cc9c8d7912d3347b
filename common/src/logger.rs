use chrono::Local;
use colored::*;

/// Console logger shared by every actor of the simulator.
///
/// Each line looks like `[HH:MM:SS][LEVEL][NAME] → message`. The name is
/// upper-cased so actors are easy to tell apart in an interleaved output.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    /// Logger with the default (green) info color.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, Color::Green)
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn line(&self, level: &str) -> String {
        format!("[{}][{}][{}]", Self::timestamp(), level, self.name)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.line("INFO").bold().color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    /// Mirrors a spoken announcement on the console.
    pub fn voice(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.line("VOICE").bold().magenta(),
            "♪".dimmed(),
            msg.as_ref().italic()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {} {}",
            self.line("WARN").bold().yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            self.line("ERROR").bold().bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
