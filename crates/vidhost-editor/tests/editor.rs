//! End-to-end editor flows against recording collaborators.

use vidhost_config::{NsfwPolicy, Resolution};
use vidhost_editor::{
    EditorConfig, EditorError, FieldValue, LocaleCode, NotificationKind, SaveOutcome,
    ScalarField, SnapshotPolicy, resolution_key,
};
use vidhost_test_support::fixtures::{init_test_logging, sample_config};
use vidhost_test_support::mocks::Harness;

const CSS: &str = "customizationCSS";
const JAVASCRIPT: &str = "customizationJavascript";

async fn loaded(harness: &mut Harness) {
    init_test_logging();
    harness.editor.load().await.expect("load succeeds");
}

#[tokio::test]
async fn unchanged_form_saves_document_identical_to_loaded_one() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;

    let outcome = harness.editor.submit().await.expect("save succeeds");

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(harness.service.persisted(), vec![sample_config()]);
    assert!(harness.prompt.requests().is_empty());
}

#[tokio::test]
async fn load_populates_every_field_and_snapshot() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;

    let form = harness.editor.form();
    assert_eq!(form.text(ScalarField::InstanceName.key()), Some("Tube"));
    assert_eq!(
        form.text(ScalarField::InstanceDefaultNsfwPolicy.key()),
        Some(NsfwPolicy::Blur.as_str())
    );
    assert_eq!(form.get("signupLimit"), Some(&FieldValue::Number(100)));
    assert_eq!(form.flag("transcodingResolution480p"), Some(true));
    assert_eq!(form.flag("transcodingResolution1080p"), Some(false));
    assert!(form.is_valid());
    assert_eq!(harness.editor.snapshot().css, "body { background: #111; }");
    assert_eq!(harness.editor.document(), Some(&sample_config()));
    assert!(harness.editor.is_transcoding_enabled());
    assert!(harness.editor.is_signup_enabled());
    assert_eq!(harness.service.fetch_calls(), 1);
}

#[tokio::test]
async fn non_customization_edits_save_without_prompt() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness
        .editor
        .form_mut()
        .set("instanceName", "Renamed Tube")
        .expect("known field");

    let outcome = harness.editor.submit().await.expect("save succeeds");

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(harness.prompt.requests().is_empty());
    assert_eq!(harness.service.stored().instance.name, "Renamed Tube");
}

#[tokio::test]
async fn blanked_customization_is_not_treated_as_change() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.editor.form_mut().set(CSS, "   ").expect("known field");

    let outcome = harness.editor.submit().await.expect("save succeeds");

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(harness.prompt.requests().is_empty());
    assert_eq!(harness.service.stored().instance.customizations.css, "   ");
}

#[tokio::test]
async fn changed_css_requires_exact_phrase() {
    for typed in [
        Some("i understand the CSS I set"),
        Some("I understand the CSS I set."),
        None,
    ] {
        let mut harness = Harness::new(sample_config());
        loaded(&mut harness).await;
        match typed {
            Some(text) => harness.prompt.answer(text),
            None => harness.prompt.cancel(),
        }
        harness
            .editor
            .form_mut()
            .set(CSS, "body { color: red; }")
            .expect("known field");

        let outcome = harness.editor.submit().await.expect("abort is not an error");

        assert_eq!(outcome, SaveOutcome::Aborted);
        assert!(harness.service.persisted().is_empty());
        assert_eq!(harness.reloader.calls(), 0);
        assert!(harness.notifier.all().is_empty());
        assert_eq!(
            harness.prompt.requests()[0].expected,
            "I understand the CSS I set"
        );
        assert_eq!(harness.editor.form().text(CSS), Some("body { color: red; }"));
        assert_eq!(harness.editor.document(), Some(&sample_config()));
        assert_eq!(harness.editor.snapshot().css, "body { background: #111; }");
    }
}

#[tokio::test]
async fn both_customizations_changed_use_joined_phrase() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.prompt.answer("I understand the CSS/JavaScript I set");
    let form = harness.editor.form_mut();
    form.set(CSS, "body { color: red; }").expect("known field");
    form.set(JAVASCRIPT, "console.log('hi')").expect("known field");

    let outcome = harness.editor.submit().await.expect("save succeeds");

    assert_eq!(outcome, SaveOutcome::Saved);
    let requests = harness.prompt.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].expected, "I understand the CSS/JavaScript I set");
    assert!(requests[0].message.starts_with("You set custom CSS/JavaScript. "));
    assert_eq!(
        requests[0].label,
        "Please type \"I understand the CSS/JavaScript I set\" to confirm."
    );
    assert_eq!(
        harness.service.stored().instance.customizations.javascript,
        "console.log('hi')"
    );
}

#[tokio::test]
async fn resolution_toggles_map_both_ways() {
    let mut config = sample_config();
    config.transcoding.resolutions = [(Resolution::P480, true), (Resolution::P720, true)]
        .into_iter()
        .collect();
    let mut harness = Harness::new(config);
    loaded(&mut harness).await;

    let form = harness.editor.form();
    for resolution in Resolution::ALL {
        let expected = matches!(resolution, Resolution::P480 | Resolution::P720);
        assert_eq!(form.flag(&resolution_key(resolution)), Some(expected));
    }

    harness
        .editor
        .form_mut()
        .set(&resolution_key(Resolution::P1080), true)
        .expect("known field");
    harness.editor.submit().await.expect("save succeeds");

    let stored = harness.service.stored().transcoding.resolutions;
    let enabled: Vec<_> = stored
        .iter()
        .filter(|(_, on)| *on)
        .map(|(resolution, _)| resolution)
        .collect();
    assert_eq!(
        enabled,
        [Resolution::P480, Resolution::P720, Resolution::P1080]
    );
}

#[tokio::test]
async fn load_failure_notifies_and_leaves_form_empty() {
    init_test_logging();
    let mut harness = Harness::new(sample_config());
    harness.service.fail_fetch("network unreachable");

    let err = harness.editor.load().await.expect_err("load fails");

    assert!(matches!(err, EditorError::LoadFailure { ref message } if message == "network unreachable"));
    let errors = harness.notifier.of_kind(NotificationKind::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].title, "Error");
    assert_eq!(errors[0].message, "network unreachable");
    assert_eq!(harness.editor.document(), None);
    assert_eq!(harness.editor.form().text("instanceName"), None);
}

#[tokio::test]
async fn save_adopts_server_response_and_reloads_once() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.service.normalize_with(|mut config| {
        config.instance.name = config.instance.name.trim().to_string();
        config
    });
    harness
        .editor
        .form_mut()
        .set("instanceName", "  Spaced Tube  ")
        .expect("known field");

    let outcome = harness.editor.submit().await.expect("save succeeds");

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(harness.reloader.calls(), 1);
    let successes = harness.notifier.of_kind(NotificationKind::Success);
    assert_eq!(successes.len(), 1);
    assert_eq!(successes[0].title, "Success");
    assert_eq!(successes[0].message, "Configuration updated.");
    assert_eq!(harness.editor.form().text("instanceName"), Some("Spaced Tube"));
    assert_eq!(
        harness.editor.document().map(|doc| doc.instance.name.as_str()),
        Some("Spaced Tube")
    );
}

#[tokio::test]
async fn save_failure_keeps_previous_state() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.service.fail_persist("quota exceeded");
    harness
        .editor
        .form_mut()
        .set("instanceName", "Renamed")
        .expect("known field");

    let err = harness.editor.submit().await.expect_err("save fails");

    assert!(matches!(err, EditorError::SaveFailure { ref message } if message == "quota exceeded"));
    assert_eq!(harness.reloader.calls(), 0);
    let errors = harness.notifier.of_kind(NotificationKind::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "quota exceeded");
    assert_eq!(harness.editor.form().text("instanceName"), Some("Renamed"));
    assert_eq!(harness.editor.document(), Some(&sample_config()));
}

#[tokio::test]
async fn invalid_form_blocks_submit() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    let form = harness.editor.form_mut();
    form.set("adminEmail", "not-an-email").expect("known field");
    form.set("signupLimit", -5_i64).expect("known field");

    let err = harness.editor.submit().await.expect_err("submit blocked");

    match err {
        EditorError::InvalidForm { fields } => {
            assert_eq!(fields, ["signupLimit", "adminEmail"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(harness.service.persisted().is_empty());
    assert!(harness.notifier.all().is_empty());
}

#[tokio::test]
async fn unknown_nsfw_policy_blocks_submit_before_prompt() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.prompt.answer("I understand the CSS I set");
    let form = harness.editor.form_mut();
    form.set("instanceDefaultNSFWPolicy", "hide").expect("known field");
    form.set(CSS, "a {}").expect("known field");

    assert!(!harness.editor.form().is_valid());
    let err = harness.editor.submit().await.expect_err("submit blocked");

    match err {
        EditorError::InvalidForm { fields } => {
            assert_eq!(fields, ["instanceDefaultNSFWPolicy"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(harness.prompt.requests().is_empty());
    assert!(harness.service.persisted().is_empty());
}

#[tokio::test]
async fn unmappable_form_notifies_without_prompting() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.prompt.answer("I understand the CSS I set");
    let form = harness.editor.form_mut();
    form.set("instanceDefaultNSFWPolicy", "hide").expect("known field");
    form.set(CSS, "a {}").expect("known field");

    let err = harness.editor.save().await.expect_err("save fails");

    assert!(matches!(err, EditorError::Mapping(_)));
    let errors = harness.notifier.of_kind(NotificationKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("instanceDefaultNSFWPolicy"));
    assert!(harness.prompt.requests().is_empty());
    assert!(harness.service.persisted().is_empty());
    assert_eq!(harness.reloader.calls(), 0);
    assert_eq!(harness.editor.form().text(CSS), Some("a {}"));
    assert_eq!(harness.editor.document(), Some(&sample_config()));
}

#[tokio::test]
async fn refresh_policy_rebaselines_snapshot_after_save() {
    let mut harness = Harness::new(sample_config());
    loaded(&mut harness).await;
    harness.prompt.answer("I understand the CSS I set");
    harness
        .editor
        .form_mut()
        .set(CSS, "body { color: red; }")
        .expect("known field");
    harness.editor.submit().await.expect("first save");

    harness.editor.submit().await.expect("second save");

    assert_eq!(harness.prompt.requests().len(), 1);
    assert_eq!(harness.editor.snapshot().css, "body { color: red; }");
}

#[tokio::test]
async fn load_time_policy_keeps_prompting_after_save() {
    let settings = EditorConfig {
        locale: LocaleCode::En,
        snapshot_policy: SnapshotPolicy::KeepLoadTime,
    };
    let mut harness = Harness::with_config(sample_config(), settings);
    loaded(&mut harness).await;
    harness.prompt.answer("I understand the CSS I set");
    harness
        .editor
        .form_mut()
        .set(CSS, "body { color: red; }")
        .expect("known field");
    harness.editor.submit().await.expect("first save");

    harness.editor.submit().await.expect("second save");

    assert_eq!(harness.prompt.requests().len(), 2);
    assert_eq!(harness.editor.snapshot().css, "body { background: #111; }");
}

#[tokio::test]
async fn french_locale_translates_notifications() {
    let settings = EditorConfig {
        locale: LocaleCode::Fr,
        ..EditorConfig::default()
    };
    let mut harness = Harness::with_config(sample_config(), settings);
    harness.service.fail_fetch("réseau indisponible");

    let _ = harness.editor.load().await;

    assert_eq!(harness.notifier.all()[0].title, "Erreur");
}
