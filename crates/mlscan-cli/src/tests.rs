use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["mlscan", "search", "iphone 16 pro"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Search {
            term,
            exclude,
            pages,
            json,
        } => {
            assert_eq!(term, "iphone 16 pro");
            assert!(exclude.is_empty());
            assert!(pages.is_none());
            assert!(!json);
        }
        other => panic!("expected Search, got {other:?}"),
    }
}

#[test]
fn parses_repeated_excludes_and_pages() {
    let cli = Cli::try_parse_from([
        "mlscan",
        "search",
        "iphone 16 pro",
        "--exclude",
        "max",
        "-x",
        "capa",
        "--pages",
        "5",
        "--json",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Search { ref exclude, pages: Some(5), json: true, .. }
            if exclude == &["max".to_string(), "capa".to_string()]
    ));
}

#[test]
fn search_requires_a_term() {
    assert!(Cli::try_parse_from(["mlscan", "search"]).is_err());
}

#[test]
fn search_rejects_non_numeric_pages() {
    assert!(Cli::try_parse_from(["mlscan", "search", "tv", "--pages", "many"]).is_err());
}

#[test]
fn parses_batch_without_file() {
    let cli = Cli::try_parse_from(["mlscan", "batch"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Batch {
            file: None,
            json: false
        }
    ));
}

#[test]
fn parses_batch_with_file() {
    let cli = Cli::try_parse_from(["mlscan", "batch", "--file", "searches.yaml", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Batch { file: Some(ref p), json: true } if p == &PathBuf::from("searches.yaml")
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["mlscan"]).is_err());
}
