use clap::Parser;
use homie_match::core::{ConfigProvider, IdentityStore};
use homie_match::utils::error::ErrorSeverity;
use homie_match::utils::{logger, validation::Validate};
use homie_match::{
    combine_inputs, filter_groups, search_pgs, AppConfig, CliConfig, Command, ExtractedPreference,
    HomieError, InMemoryIdentityStore, PgFilter, PreferenceExtractor, PreferenceKeywordTable,
    Questionnaire, Result, SeededFixtures, TracingNotifier,
};

fn load_config(cli: &CliConfig) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_fixtures(config: &AppConfig) -> Result<SeededFixtures> {
    match config.fixtures_path() {
        Some(path) => SeededFixtures::from_file(path),
        None => Ok(SeededFixtures::builtin()),
    }
}

fn print_preferences(preferences: &[ExtractedPreference]) {
    if preferences.is_empty() {
        println!("No specific preferences were detected. Try being more specific.");
        return;
    }
    for (index, pref) in preferences.iter().enumerate() {
        let flag = if pref.is_non_negotiable {
            " • Non-negotiable"
        } else {
            ""
        };
        println!("{:>2}. {:<12} {} priority{}", index, pref.trait_name, pref.priority, flag);
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = load_config(&cli)?;
    let extractor = PreferenceExtractor::new(PreferenceKeywordTable::from_config(&config)?);

    match cli.command {
        Command::Extract { text, extra, json } => {
            let preferences = extractor.extract(&combine_inputs(&text, &extra));
            if json {
                println!("{}", serde_json::to_string_pretty(&preferences)?);
            } else {
                print_preferences(&preferences);
            }
        }
        Command::Questionnaire {
            text,
            extra,
            toggle,
            email,
            user_type,
            skip,
        } => {
            let store = InMemoryIdentityStore::from_config(&config);
            let notifier = TracingNotifier;

            // CLI 沒有密碼輸入，用固定值登入示範帳號
            store.login(&email, "demo-password", user_type).await?;

            let mut questionnaire = Questionnaire::new(&extractor, &notifier);
            questionnaire.set_transcript(text);
            for (index, field) in extra.into_iter().enumerate() {
                if index > 0 {
                    questionnaire.add_input();
                }
                questionnaire.update_input(index, field)?;
            }

            let user = if skip {
                questionnaire.skip(&store).await?
            } else {
                if questionnaire.analyze()?.is_empty() {
                    println!("No specific preferences were detected. Nothing was saved.");
                    return Ok(());
                }
                for index in toggle {
                    questionnaire.toggle_non_negotiable(index)?;
                }
                questionnaire.complete(&store).await?
            };

            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Pgs {
            query,
            locality,
            budget,
            room_type,
        } => {
            let fixtures = load_fixtures(&config)?;
            let mut filter = PgFilter {
                query,
                locality,
                budget: budget.as_deref().map(str::parse).transpose()?,
                sharing: None,
            };
            if let Some(room_type) = room_type.as_deref() {
                filter = filter.with_room_type(room_type)?;
            }

            let results = search_pgs(&fixtures, &filter);
            if results.is_empty() {
                println!("No PGs match these filters.");
            }
            for pg in results {
                println!(
                    "{} | {} | ₹{}/month | {} | ★ {:.1} (AI {:.1})",
                    pg.name, pg.locality, pg.rent, pg.room_type, pg.rating, pg.ai_rating
                );
            }
        }
        Command::Groups { scope, query } => {
            let fixtures = load_fixtures(&config)?;
            for group in filter_groups(&fixtures, scope, &query) {
                let joined = if group.is_joined { " [joined]" } else { "" };
                println!(
                    "{} ({}), {} members{}",
                    group.name, group.location, group.members, joined
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        report_failure(&e);
    }
}

fn report_failure(e: &HomieError) {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
