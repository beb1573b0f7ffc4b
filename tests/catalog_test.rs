use anyhow::Result;
use homie_match::core::ConfigProvider;
use homie_match::domain::model::GroupScope;
use homie_match::{filter_groups, search_pgs, AppConfig, PgFilter, SeededFixtures};
use tempfile::TempDir;

fn names<T, F: Fn(&T) -> &str>(items: &[&T], name: F) -> Vec<String> {
    items.iter().map(|item| name(*item).to_string()).collect()
}

#[test]
fn test_empty_filter_returns_all_in_seed_order() {
    let fixtures = SeededFixtures::builtin();
    let results = search_pgs(&fixtures, &PgFilter::default());
    assert_eq!(
        names(&results, |pg| pg.name.as_str()),
        vec!["Sunshine Girls PG", "Cozy Corner PG", "Elite Ladies Hostel"]
    );
}

#[test]
fn test_pg_filters_narrow_results() -> Result<()> {
    let fixtures = SeededFixtures::builtin();

    let budget = PgFilter {
        budget: Some("15-20k".parse()?),
        ..Default::default()
    };
    assert_eq!(
        names(&search_pgs(&fixtures, &budget), |pg| pg.name.as_str()),
        vec!["Sunshine Girls PG", "Cozy Corner PG"]
    );

    let locality = PgFilter {
        locality: Some("hsr".to_string()),
        ..Default::default()
    };
    assert_eq!(
        names(&search_pgs(&fixtures, &locality), |pg| pg.name.as_str()),
        vec!["Cozy Corner PG"]
    );

    let room = PgFilter::default().with_room_type("1-sharing")?;
    assert_eq!(
        names(&search_pgs(&fixtures, &room), |pg| pg.name.as_str()),
        vec!["Elite Ladies Hostel"]
    );

    let query = PgFilter {
        query: Some("MEALS".to_string()),
        budget: Some("25k+".parse()?),
        ..Default::default()
    };
    assert!(search_pgs(&fixtures, &query).is_empty());
    Ok(())
}

#[test]
fn test_invalid_room_type() {
    assert!(PgFilter::default().with_room_type("penthouse").is_err());
}

#[test]
fn test_group_filter_by_scope_and_query() {
    let fixtures = SeededFixtures::builtin();

    let city = filter_groups(&fixtures, GroupScope::City, "");
    assert_eq!(city.len(), 4);

    let mumbai = filter_groups(&fixtures, GroupScope::City, "MUM");
    assert_eq!(names(&mumbai, |g| g.name.as_str()), vec!["Mumbai Living Network"]);

    let karnataka = filter_groups(&fixtures, GroupScope::State, "karnataka");
    assert_eq!(names(&karnataka, |g| g.name.as_str()), vec!["Karnataka State Group"]);

    assert!(filter_groups(&fixtures, GroupScope::Country, "bangalore").is_empty());
}

#[test]
fn test_fixtures_loaded_from_configured_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let seed_path = temp_dir.path().join("seed.toml");
    std::fs::write(
        &seed_path,
        r#"
[[pg]]
id = 11
name = "Lakeview Ladies PG"
rating = 4.4
aiRating = 8.8
locality = "Whitefield"
rent = 11000
roomType = "4 sharing"
"#,
    )?;

    let normalized_path = seed_path.to_string_lossy().replace('\\', "/");
    let config_path = temp_dir.path().join("homie.toml");
    std::fs::write(
        &config_path,
        format!("[fixtures]\npath = \"{}\"\n", normalized_path),
    )?;

    let config = AppConfig::from_file(&config_path)?;
    let fixtures = SeededFixtures::from_file(config.fixtures_path().expect("path set"))?;

    let filter = PgFilter {
        budget: Some("10-15k".parse()?),
        ..Default::default()
    }
    .with_room_type("4-sharing")?;
    let results = search_pgs(&fixtures, &filter);
    assert_eq!(names(&results, |pg| pg.name.as_str()), vec!["Lakeview Ladies PG"]);
    assert!(filter_groups(&fixtures, GroupScope::City, "").is_empty());
    Ok(())
}
