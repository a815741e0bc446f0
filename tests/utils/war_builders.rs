//! War construction helpers - builds raw log lines the way the game writes them
#![allow(dead_code)] // Test utilities may not all be used in every test

use warstats::{LogParser, War};

// ============================================================================
// War Setup Utilities
// ============================================================================

pub struct WarBuilder {
    name: String,
    lines: Vec<String>,
    clock: u32, // seconds since 20:00:00
}

impl WarBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: vec![],
            clock: 0,
        }
    }

    /// `player` from the own side killed `enemy` of `guild`
    pub fn kill(self, player: &str, enemy: &str, guild: &str) -> Self {
        self.event(player, "has killed", enemy, guild)
    }

    /// `player` from the own side died to `enemy` of `guild`
    pub fn death(self, player: &str, enemy: &str, guild: &str) -> Self {
        self.event(player, "died to", enemy, guild)
    }

    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> War {
        self.build_with(&LogParser::default())
    }

    pub fn build_with(self, parser: &LogParser) -> War {
        War::from_lines(&self.name, &self.lines, parser).expect("war lines should parse")
    }

    fn event(mut self, player: &str, verb: &str, enemy: &str, guild: &str) -> Self {
        let time = format!(
            "{:02}:{:02}:{:02}",
            20 + self.clock / 3600,
            (self.clock / 60) % 60,
            self.clock % 60
        );
        self.lines
            .push(format!("[{time}] {player} {verb} {enemy} from {guild}"));
        self.clock += 30;
        self
    }
}
