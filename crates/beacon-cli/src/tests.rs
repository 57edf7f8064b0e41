use super::*;

fn location(cli: Cli) -> LocationArgs {
    match cli.command {
        Commands::List { location, .. } | Commands::Search { location } => location,
    }
}

fn config(position: Option<Coordinates>) -> AppConfig {
    AppConfig {
        env: beacon_core::Environment::Test,
        log_level: "info".to_string(),
        directory_url: "http://localhost:9000/schools".to_string(),
        request_timeout_secs: 5,
        user_agent: "beacon-test/0.1".to_string(),
        geolocation_timeout_ms: 4000,
        geolocation_high_accuracy: true,
        position,
    }
}

#[test]
fn parses_list_with_query() {
    let cli = Cli::try_parse_from(["beacon", "list", "--query", "alp"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::List { ref query, .. } if query == "alp"));
}

#[test]
fn list_query_defaults_to_empty() {
    let cli = Cli::try_parse_from(["beacon", "list"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::List { ref query, .. } if query.is_empty()));
}

#[test]
fn parses_negative_coordinates() {
    let cli = Cli::try_parse_from(["beacon", "search", "--lat", "40.7", "--lng", "-73.9"])
        .expect("expected valid cli args");
    let args = location(cli);
    assert_eq!(args.lat, Some(40.7));
    assert_eq!(args.lng, Some(-73.9));
    assert_eq!(args.limit, 20);
}

#[test]
fn lat_requires_lng() {
    assert!(Cli::try_parse_from(["beacon", "list", "--lat", "40.7"]).is_err());
}

#[test]
fn no_location_conflicts_with_coordinates() {
    let result = Cli::try_parse_from([
        "beacon",
        "list",
        "--no-location",
        "--lat",
        "1",
        "--lng",
        "2",
    ]);
    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["beacon"]).is_err());
}

#[test]
fn position_source_prefers_flags_over_config() {
    let cli = Cli::try_parse_from(["beacon", "list", "--lat", "1", "--lng", "2"]).unwrap();
    let source = position_source(&config(Coordinates::new(5.0, 5.0)), &location(cli)).unwrap();
    assert_eq!(source, Some(StaticPosition::Fixed(Coordinates::new(1.0, 2.0).unwrap())));
}

#[test]
fn position_source_falls_back_to_config() {
    let cli = Cli::try_parse_from(["beacon", "list"]).unwrap();
    let source = position_source(&config(Coordinates::new(5.0, 5.0)), &location(cli)).unwrap();
    assert_eq!(source, Some(StaticPosition::Fixed(Coordinates::new(5.0, 5.0).unwrap())));
}

#[test]
fn position_source_absent_without_flags_or_config() {
    let cli = Cli::try_parse_from(["beacon", "list"]).unwrap();
    assert_eq!(position_source(&config(None), &location(cli)).unwrap(), None);
}

#[test]
fn no_location_flag_denies() {
    let cli = Cli::try_parse_from(["beacon", "list", "--no-location"]).unwrap();
    let source = position_source(&config(Coordinates::new(5.0, 5.0)), &location(cli)).unwrap();
    assert_eq!(source, Some(StaticPosition::Denied));
}

#[test]
fn out_of_range_flags_are_rejected() {
    let cli = Cli::try_parse_from(["beacon", "list", "--lat", "123.444", "--lng", "12.3"]).unwrap();
    assert!(position_source(&config(None), &location(cli)).is_err());
}

#[test]
fn locate_line_activates_search_box() {
    assert_eq!(parse_input(" :locate "), UserInput::SearchBoxActivated);
    assert_eq!(
        parse_input("Alpha"),
        UserInput::QueryChanged("Alpha".to_string())
    );
}
