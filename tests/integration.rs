// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use iconsmith::config::{self, Config, GeneralSection};
use iconsmith::generation::{
    GeneratedIcon, GenerationError, GenerationService, IconRequest,
};
use iconsmith::i18n::I18n;
use iconsmith::reference::ReferenceImage;
use iconsmith::studio::{Outcome, State};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;

fn png_bytes() -> Vec<u8> {
    let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([40, 50, 60, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode test png");
    bytes
}

fn reference(name: &str) -> ReferenceImage {
    ReferenceImage::from_bytes(PathBuf::from(name), png_bytes()).expect("fixture image")
}

/// Test double standing in for the external generation backend.
struct ScriptedService {
    result: Result<GeneratedIcon, GenerationError>,
}

#[async_trait]
impl GenerationService for ScriptedService {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    async fn generate_icon(&self, _request: IconRequest) -> Result<GeneratedIcon, GenerationError> {
        self.result.clone()
    }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralSection {
            language: Some("en-US".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_to_path(&english, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralSection {
            language: Some("fr".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn every_generation_error_key_is_translated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let errors = [
        GenerationError::MissingCredentials,
        GenerationError::RateLimited(String::new()),
        GenerationError::QuotaExceeded(String::new()),
        GenerationError::Auth(String::new()),
        GenerationError::Blocked(String::new()),
        GenerationError::Network(String::new()),
        GenerationError::NoImage,
        GenerationError::Malformed(String::new()),
        GenerationError::Other(String::new()),
    ];
    for error in errors {
        let text = i18n.tr(error.i18n_key());
        assert!(
            !text.starts_with("MISSING"),
            "untranslated key: {}",
            error.i18n_key()
        );
    }
}

#[tokio::test]
async fn two_styles_and_prompt_generate_successfully() {
    let mut state = State::new();
    state.push_styles(vec![reference("a.png"), reference("b.png")]);
    state.set_prompt("a sun icon".to_string());

    let (ticket, request) = state.begin_generation().expect("inputs are complete");
    assert_eq!(request.style_images.len(), 2);
    assert_eq!(request.prompt, "a sun icon");
    assert!(request.content_image.is_none());

    let payload = GeneratedIcon::new(vec![9, 8, 7], "image/png");
    let service = ScriptedService {
        result: Ok(payload.clone()),
    };
    let result = service.generate_icon(request).await;

    assert!(state.resolve_generation(ticket, result));
    match state.outcome() {
        Outcome::Ready { icon, .. } => {
            assert_eq!(icon, &payload);
            // The save action references exactly these bytes.
            assert_eq!(icon.data_url(), payload.data_url());
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_generation_surfaces_the_service_message() {
    let mut state = State::new();
    state.push_styles(vec![reference("a.png")]);
    state.set_prompt("a sun icon".to_string());

    let (ticket, request) = state.begin_generation().expect("inputs are complete");
    let service = ScriptedService {
        result: Err(GenerationError::from_message("rate limited")),
    };
    let result = service.generate_icon(request).await;

    assert!(state.resolve_generation(ticket, result));
    match state.outcome() {
        Outcome::Failed(error) => {
            assert!(format!("{error}").contains("rate limited"));
            assert_eq!(error.i18n_key(), "error-generate-rate-limited");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn generate_without_prompt_is_inert() {
    let mut state = State::new();
    state.push_styles(vec![reference("a.png")]);

    assert!(state.begin_generation().is_none());
    assert!(matches!(state.outcome(), Outcome::Idle));
}

#[tokio::test]
async fn reset_during_flight_discards_the_late_response() {
    let mut state = State::new();
    state.push_styles(vec![reference("a.png")]);
    state.set_prompt("a sun icon".to_string());

    let (ticket, request) = state.begin_generation().expect("inputs are complete");
    state.reset();

    let service = ScriptedService {
        result: Ok(GeneratedIcon::new(vec![1], "image/png")),
    };
    let result = service.generate_icon(request).await;

    assert!(!state.resolve_generation(ticket, result));
    assert!(matches!(state.outcome(), Outcome::Idle));
    assert!(state.styles().is_empty());
    assert!(state.prompt().is_empty());
}

#[tokio::test]
async fn cleared_content_image_is_omitted_from_the_payload() {
    let mut state = State::new();
    state.push_styles(vec![reference("a.png")]);
    state.set_prompt("a robot cat".to_string());
    state.set_content(reference("subject.png"));
    state.clear_content();

    let (_, request) = state.begin_generation().expect("inputs are complete");
    assert!(request.content_image.is_none());
}
