use anyhow::Result;
use homie_match::core::IdentityStore;
use homie_match::domain::model::SignupRequest;
use homie_match::{
    HomieError, InMemoryIdentityStore, MemoryNotifier, PreferenceExtractor, Priority,
    Questionnaire, Step, UserType,
};

async fn signed_in_store() -> Result<InMemoryIdentityStore> {
    let store = InMemoryIdentityStore::instant();
    store
        .login("priya@example.in", "hunter22", UserType::Student)
        .await?;
    Ok(store)
}

#[tokio::test]
async fn test_complete_saves_preferences_to_profile() -> Result<()> {
    let store = signed_in_store().await?;
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();

    let mut questionnaire = Questionnaire::new(&extractor, &notifier);
    questionnaire.set_transcript("I need a tidy roommate");
    questionnaire.update_input(0, "no pets please")?;

    let detected = questionnaire.analyze()?.len();
    assert_eq!(detected, 2);
    assert_eq!(questionnaire.step(), Step::Review);

    questionnaire.toggle_non_negotiable(1)?;
    questionnaire.set_priority(0, Priority::Low)?;

    let user = questionnaire.complete(&store).await?;
    assert_eq!(questionnaire.step(), Step::Completed);
    assert_eq!(user.questionnaire_completed, Some(true));
    assert!(user.completed_at.is_some());

    let saved = user.roommate_preferences.expect("preferences saved");
    assert_eq!(saved[0].trait_name, "Cleanliness");
    assert_eq!(saved[0].priority, Priority::Low);
    assert!(!saved[0].is_non_negotiable);
    assert_eq!(saved[1].trait_name, "Pets");
    assert_eq!(saved[1].priority, Priority::High);
    assert!(saved[1].is_non_negotiable);

    let current = store.current_user().await.expect("still signed in");
    assert_eq!(current.roommate_preferences, Some(saved));

    assert_eq!(
        notifier.successes(),
        vec![
            "Extracted 2 preferences from your input!".to_string(),
            "Questionnaire completed! Redirecting to dashboard...".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_keyword_free_input_stays_on_input_step() -> Result<()> {
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();
    let mut questionnaire = Questionnaire::new(&extractor, &notifier);

    questionnaire.set_transcript("banana");
    assert!(questionnaire.analyze()?.is_empty());
    assert_eq!(questionnaire.step(), Step::Input);
    assert_eq!(notifier.errors().len(), 1);

    let store = signed_in_store().await?;
    let err = questionnaire.complete(&store).await.unwrap_err();
    assert!(matches!(err, HomieError::InvalidStep { .. }));
    Ok(())
}

#[tokio::test]
async fn test_toggle_twice_restores_flag() -> Result<()> {
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();
    let mut questionnaire = Questionnaire::new(&extractor, &notifier);

    questionnaire.set_transcript("quiet music");
    questionnaire.analyze()?;
    let before = questionnaire.preferences().to_vec();

    questionnaire.toggle_non_negotiable(0)?;
    assert_ne!(questionnaire.preferences(), before.as_slice());
    questionnaire.toggle_non_negotiable(0)?;
    assert_eq!(questionnaire.preferences(), before.as_slice());

    assert!(matches!(
        questionnaire.toggle_non_negotiable(9),
        Err(HomieError::IndexOutOfRange { index: 9, len: 2 })
    ));
    Ok(())
}

#[tokio::test]
async fn test_back_to_edit_and_reanalyze() -> Result<()> {
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();
    let mut questionnaire = Questionnaire::new(&extractor, &notifier);

    questionnaire.set_transcript("early mornings");
    questionnaire.analyze()?;
    questionnaire.back_to_edit()?;
    assert_eq!(questionnaire.step(), Step::Input);

    questionnaire.append_transcript("and a kitchen");
    let traits: Vec<String> = questionnaire
        .analyze()?
        .iter()
        .map(|p| p.trait_name.clone())
        .collect();
    assert_eq!(traits, vec!["Schedule", "Cooking"]);
    Ok(())
}

#[tokio::test]
async fn test_skip_marks_completed_without_preferences() -> Result<()> {
    let store = signed_in_store().await?;
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();
    let mut questionnaire = Questionnaire::new(&extractor, &notifier);

    let user = questionnaire.skip(&store).await?;
    assert_eq!(user.questionnaire_completed, Some(true));
    assert!(user.roommate_preferences.is_none());
    assert_eq!(questionnaire.step(), Step::Completed);
    Ok(())
}

#[tokio::test]
async fn test_complete_requires_session() -> Result<()> {
    let store = InMemoryIdentityStore::instant();
    let extractor = PreferenceExtractor::default();
    let notifier = MemoryNotifier::new();
    let mut questionnaire = Questionnaire::new(&extractor, &notifier);

    questionnaire.set_transcript("clean");
    questionnaire.analyze()?;

    let err = questionnaire.complete(&store).await.unwrap_err();
    assert!(matches!(err, HomieError::NotAuthenticated));
    assert_eq!(questionnaire.step(), Step::Review);
    Ok(())
}

#[tokio::test]
async fn test_signup_then_logout() -> Result<()> {
    let store = InMemoryIdentityStore::instant();
    let user = store
        .signup(SignupRequest {
            name: "Meera".to_string(),
            email: "meera@example.in".to_string(),
            phone: "+91 9123456780".to_string(),
            address: "Koramangala, Bangalore".to_string(),
            user_type: UserType::Owner,
            documents: vec!["property-deed.pdf".to_string()],
            password: "secret12".to_string(),
            confirm_password: "secret12".to_string(),
        })
        .await?;

    assert!(!user.is_verified);
    assert_eq!(user.documents, vec!["property-deed.pdf".to_string()]);
    assert_eq!(store.current_user().await.map(|u| u.id), Some(user.id));

    store.logout().await;
    assert!(store.current_user().await.is_none());
    Ok(())
}

#[test]
fn test_signup_rejects_mismatched_passwords() {
    let store = InMemoryIdentityStore::instant();
    let result = tokio_test::block_on(store.signup(SignupRequest {
        name: "Meera".to_string(),
        email: "meera@example.in".to_string(),
        phone: "+91 9123456780".to_string(),
        address: "Koramangala, Bangalore".to_string(),
        user_type: UserType::Student,
        documents: vec![],
        password: "secret12".to_string(),
        confirm_password: "secret13".to_string(),
    }));

    assert!(matches!(result, Err(HomieError::ValidationError { .. })));
    assert!(tokio_test::block_on(store.current_user()).is_none());
}
