use canned_error::ApplicationErrorKind;
use canned_github::{
    MISSING_FIELD_ERROR, SearchUsersDto, UserProfileDto, user_profile_from_dto,
    user_profiles_from_search,
};

fn octocat() -> UserProfileDto {
    UserProfileDto {
        login: Some("octocat".to_string()),
        avatar_url: Some("https://avatars.githubusercontent.com/u/583231".to_string()),
        html_url: Some("https://github.com/octocat".to_string()),
        name: Some("The Octocat".to_string()),
        ..Default::default()
    }
}

#[test]
fn complete_dto_maps_to_profile() {
    let profile = user_profile_from_dto(octocat())
        .unwrap_or_propagate()
        .expect("profile");

    assert_eq!(profile.login(), "octocat");
    assert_eq!(profile.html_url(), "https://github.com/octocat");
    assert_eq!(profile.name().as_deref(), Some("The Octocat"));
}

#[test]
fn name_is_optional() {
    let dto = UserProfileDto {
        name: None,
        ..octocat()
    };

    let profile = user_profile_from_dto(dto).unwrap_or_propagate().expect("profile");
    assert!(profile.name().is_none());
    assert_eq!(profile.to_string(), "octocat https://github.com/octocat");
}

#[test]
fn missing_required_field_is_a_type_error() {
    let dto = UserProfileDto {
        avatar_url: None,
        ..octocat()
    };

    let error = user_profile_from_dto(dto)
        .unwrap_or_propagate()
        .expect_err("missing avatar_url");

    match error.kind() {
        ApplicationErrorKind::Custom { name, message } => {
            assert_eq!(name, MISSING_FIELD_ERROR);
            assert_eq!(message, "value for key avatar_url is not defined in dto");
        }
        other => panic!("Expected custom error, got {:?}", other),
    }
}

#[test]
fn first_missing_field_is_reported() {
    let error = user_profile_from_dto(UserProfileDto::default())
        .unwrap_or_propagate()
        .expect_err("empty dto");

    assert_eq!(error.message(), "value for key login is not defined in dto");
}

#[test]
fn dto_tolerates_unknown_and_null_fields() {
    let dto: UserProfileDto = serde_json::from_str(
        r#"{"login":"octocat","name":null,"type":"User","plan":{"name":"pro"}}"#,
    )
    .expect("dto");

    assert_eq!(dto.login.as_deref(), Some("octocat"));
    assert_eq!(dto.account_type.as_deref(), Some("User"));
    assert!(dto.name.is_none());
    assert!(dto.avatar_url.is_none());
}

#[test]
fn search_maps_every_item() {
    let dto = SearchUsersDto {
        total_count: 2,
        incomplete_results: false,
        items: vec![
            octocat(),
            UserProfileDto {
                login: Some("hubot".to_string()),
                ..octocat()
            },
        ],
    };

    let profiles = user_profiles_from_search(dto)
        .unwrap_or_propagate()
        .expect("profiles");

    let logins: Vec<_> = profiles.iter().map(|p| p.login().as_str()).collect();
    assert_eq!(logins, vec!["octocat", "hubot"]);
}

#[test]
fn one_invalid_search_item_fails_the_page() {
    let dto = SearchUsersDto {
        total_count: 2,
        incomplete_results: false,
        items: vec![octocat(), UserProfileDto::default()],
    };

    assert!(user_profiles_from_search(dto).is_failure());
}
