mod utils;
use utils::WarBuilder;

use warstats::{
    KillDeath, LogError, LogParser, MalformedPolicy, ParseConfig, War, NO_GUILD, OWN_GUILD,
};

#[test]
fn builds_war_from_raw_lines() {
    let lines = [
        "[10:00:00] Alice has killed Bob from Red",
        "[10:01:00] Bob died to Alice from Red",
    ];

    let war = War::from_lines("session1.log", lines, &LogParser::default())
        .expect("lines should parse");

    assert_eq!(war.name, "session1");
    let guild_names: Vec<&str> = war.guilds.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(guild_names, vec!["Guild", "Red"]);

    let alice = war
        .get_guild(OWN_GUILD)
        .and_then(|guild| guild.get_player("Alice"))
        .expect("Alice should be on the own side");
    assert_eq!(alice.kill_count(), 1);

    // "Bob died to Alice" puts Bob on the own side and Alice in Red
    let red_alice = war
        .get_guild("Red")
        .and_then(|guild| guild.get_player("Alice"))
        .expect("Alice should also be in Red");
    assert_eq!(red_alice.kill_count(), 1);
    assert_eq!(red_alice.kills[0].player_two, "Bob");

    let alice_kills: usize = war
        .guilds
        .iter()
        .filter_map(|guild| guild.get_player("Alice"))
        .map(|player| player.kill_count())
        .sum();
    assert_eq!(alice_kills, 2);
}

#[test]
fn every_event_shows_up_on_both_sides() {
    let war = WarBuilder::new("node_war.log")
        .kill("Alice", "Xan", "Red")
        .kill("Alice", "Yun", "Red")
        .death("Bob", "Xan", "Red")
        .kill("Carol", "Zed", "-1")
        .death("Carol", "Dave", "Guild")
        .build();

    let events = war.logs.len();
    let entries: usize = war
        .guilds
        .iter()
        .flat_map(|guild| guild.players.iter())
        .map(|player| player.kill_count() + player.death_count())
        .sum();

    assert_eq!(entries, 2 * events);
    assert!(war.get_guild(NO_GUILD).is_some());
    assert_eq!(war.start_time(), Some("20:00:00"));
    assert_eq!(war.end_time(), Some("20:02:00"));
    assert_eq!(war.duration().map(|d| d.num_seconds()), Some(120));
}

#[test]
fn malformed_line_aborts_by_default() {
    let lines = vec![
        "[10:00:00] Alice has killed Bob from Red".to_string(),
        "[10:00:30] Alice waved at Bob".to_string(),
    ];

    let result = War::from_lines("bad.log", &lines, &LogParser::default());
    assert!(matches!(result, Err(LogError::Malformed { .. })));
}

#[test]
fn malformed_lines_can_be_skipped() {
    let parser = LogParser::new(ParseConfig::new(MalformedPolicy::Skip));

    let war = WarBuilder::new("noisy.log")
        .kill("Alice", "Xan", "Red")
        .raw_line("--- connection lost ---")
        .death("Alice", "Xan", "Red")
        .build_with(&parser);

    assert_eq!(war.logs.len(), 2);
    let alice = war.get_player("Alice").expect("Alice should be present");
    assert_eq!(alice.kd(), 1.0);
}

#[test]
fn aggregates_across_wars() {
    let wars = vec![
        WarBuilder::new("monday.log")
            .kill("Alice", "Xan", "Red")
            .kill("Bob", "Yun", "Red")
            .kill("Alice", "Yun", "Red")
            .build(),
        WarBuilder::new("tuesday.log")
            .death("Alice", "Quinn", "Blue")
            .build(),
        WarBuilder::new("wednesday.log")
            .kill("Carol", "Xan", "Red")
            .death("Carol", "Xan", "Red")
            .build(),
    ];

    assert_eq!(War::wars_count("Red", &wars), 2);
    assert_eq!(War::total_kills_guilds("Red", &wars), 1);
    assert_eq!(War::total_deaths_guilds("Red", &wars), 4);
    assert_eq!(War::avg_deaths_guilds("Red", &wars), 2.0);
    assert_eq!(War::avg_kd_guilds("Red", &wars), 0.25);

    let red_players: Vec<&str> = War::unique_players_guilds("Red", &wars)
        .into_iter()
        .collect();
    assert_eq!(red_players, vec!["Xan", "Yun"]);

    assert_eq!(War::total_kills_guilds(OWN_GUILD, &wars), 4);
    assert_eq!(War::avg_kills_guilds(OWN_GUILD, &wars), 4.0 / 3.0);

    assert_eq!(War::joined_wars_count("Alice", &wars), 2);
    assert_eq!(War::joined_wars_percentage("Alice", OWN_GUILD, &wars), 2.0 / 3.0);
    assert_eq!(War::joined_wars_percentage("Xan", "Red", &wars), 1.0);
    assert_eq!(War::avg_kd_players("Alice", &wars), 2.0);
}

#[test]
fn summary_serializes_for_display() {
    let war = WarBuilder::new("friday.log")
        .kill("Alice", "Xan", "Red")
        .kill("Alice", "Yun", "Red")
        .death("Alice", "Xan", "Red")
        .build();

    let json = serde_json::to_value(war.summary()).expect("summary should serialize");

    assert_eq!(json["name"], "friday");
    assert_eq!(json["start_time"], "20:00");
    assert_eq!(json["guilds"][0]["players"][0]["highest_killstreak"], 2);
    assert_eq!(
        json["guilds"][0]["players"][0]["time_joined"],
        "20:00 - 20:01"
    );
}
