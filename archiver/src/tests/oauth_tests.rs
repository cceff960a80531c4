use crate::oauth::{signature_base_string, AccessToken, Signer};

// Worked example from Twitter's "Creating a signature" guide
const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
const TOKEN: &str = "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb";
const TOKEN_SECRET: &str = "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE";
const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const TIMESTAMP: &str = "1318622958";
const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";

fn reference_signer() -> Signer {
    Signer::new(CONSUMER_KEY, CONSUMER_SECRET).with_token(AccessToken {
        token: TOKEN.to_string(),
        secret: TOKEN_SECRET.to_string(),
    })
}

fn reference_form() -> Vec<(&'static str, String)> {
    vec![
        ("include_entities", "true".to_string()),
        (
            "status",
            "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
        ),
    ]
}

#[test]
fn test_reference_signature() {
    let header =
        reference_signer().authorization_with("POST", URL, &reference_form(), NONCE, TIMESTAMP);

    assert!(header.starts_with("OAuth "));
    assert!(
        header.contains(r#"oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D""#),
        "unexpected header: {}",
        header
    );
}

#[test]
fn test_header_carries_oauth_fields_only() {
    let header =
        reference_signer().authorization_with("POST", URL, &reference_form(), NONCE, TIMESTAMP);

    for field in [
        "oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\"",
        "oauth_nonce=",
        "oauth_signature_method=\"HMAC-SHA1\"",
        "oauth_timestamp=\"1318622958\"",
        "oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\"",
        "oauth_version=\"1.0\"",
    ] {
        assert!(header.contains(field), "missing {} in {}", field, header);
    }
    assert!(!header.contains("status="), "form fields stay in the body");
}

#[test]
fn test_consumer_only_signer_has_no_token() {
    let signer = Signer::new("key", "secret");
    assert!(!signer.has_token());

    let header = signer.authorization_with(
        "POST",
        "https://www.instapaper.com/api/1/oauth/access_token",
        &[("x_auth_mode", "client_auth".to_string())],
        "nonce",
        "1",
    );
    assert!(!header.contains("oauth_token="));
}

#[test]
fn test_fresh_nonce_per_request() {
    let signer = Signer::new("key", "secret");
    let first = signer.authorization("POST", "https://example.com/a", &[]);
    let second = signer.authorization("POST", "https://example.com/a", &[]);
    assert_ne!(first, second);
}

#[test]
fn test_base_string_sorts_and_encodes() {
    let params = vec![
        ("tag".to_string(), "news letter".to_string()),
        ("limit".to_string(), "500".to_string()),
        ("a".to_string(), "x=y&z".to_string()),
    ];

    let base = signature_base_string(
        "post",
        "https://www.instapaper.com/api/1/bookmarks/list",
        &params,
    );
    assert_eq!(
        base,
        "POST&https%3A%2F%2Fwww.instapaper.com%2Fapi%2F1%2Fbookmarks%2Flist\
         &a%3Dx%253Dy%2526z%26limit%3D500%26tag%3Dnews%2520letter"
    );
}
