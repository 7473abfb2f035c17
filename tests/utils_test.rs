use sprofcli::types::{SavedTrackItem, Track, TrackArtist, TrackTableRow};
use sprofcli::utils::*;

// Helper function to create a test saved track
fn create_test_item(id: &str, name: &str, added_at: &str, artist_names: &[&str]) -> SavedTrackItem {
    SavedTrackItem {
        added_at: added_at.to_string(),
        track: Track {
            id: id.to_string(),
            name: name.to_string(),
            popularity: 42,
            artists: artist_names
                .iter()
                .map(|n| TrackArtist {
                    id: format!("{}_artist_id", n),
                    name: n.to_string(),
                })
                .collect(),
        },
    }
}

// Helper function to create a test table row
fn create_test_row(name: &str, artists: &str, added: &str) -> TrackTableRow {
    TrackTableRow {
        name: name.to_string(),
        artists: artists.to_string(),
        popularity: 0,
        added: added.to_string(),
    }
}

#[test]
fn test_generate_code_verifier_length() {
    // Callers use the maximum length allowed by RFC 7636
    assert_eq!(CODE_VERIFIER_LENGTH, 128);

    let verifier = generate_code_verifier(CODE_VERIFIER_LENGTH);
    assert_eq!(verifier.len(), 128);

    // Minimum allowed length works the same way
    let short = generate_code_verifier(43);
    assert_eq!(short.len(), 43);
}

#[test]
fn test_generate_code_verifier_charset() {
    let verifier = generate_code_verifier(128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier(128);
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);
}

#[test]
fn test_generate_code_challenge_is_urlsafe_unpadded() {
    let challenge = generate_code_challenge(&generate_code_verifier(128));

    // base64url alphabet only, no padding
    assert!(!challenge.contains('+'));
    assert!(!challenge.contains('/'));
    assert!(!challenge.contains('='));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );

    // SHA-256 digest is 32 bytes, which encodes to 43 base64url characters
    assert_eq!(challenge.len(), 43);
}

#[test]
fn test_generate_code_challenge_known_answers() {
    // Precomputed base64url(SHA-256(input)) values
    assert_eq!(
        generate_code_challenge("abc123"),
        "bKE9UspwyIPg8LsQHkJaiehiTeUdstI5JZOvaoQRgJA"
    );
    assert_eq!(
        generate_code_challenge("test_verifier_123"),
        "HGfpffSApehaWh1OQoi0h-f-k3IZ1CickraFS3UbMvk"
    );
}

#[test]
fn test_join_artist_names() {
    let single = create_test_item("id1", "Track 1", "2023-10-01T12:00:00Z", &["Artist A"]);
    assert_eq!(join_artist_names(&single), "Artist A");

    let multiple = create_test_item(
        "id2",
        "Track 2",
        "2023-10-01T12:00:00Z",
        &["Artist A", "Artist B", "Artist C"],
    );
    assert_eq!(join_artist_names(&multiple), "Artist A, Artist B, Artist C");
}

#[test]
fn test_format_added_at() {
    // RFC 3339 timestamps are reduced to the date
    assert_eq!(format_added_at("2023-10-17T08:15:30Z"), "2023-10-17");
    assert_eq!(format_added_at("2021-01-02T23:59:59+01:00"), "2021-01-02");

    // Unparseable input passes through unchanged
    assert_eq!(format_added_at("not-a-timestamp"), "not-a-timestamp");
}

#[test]
fn test_track_table_rows() {
    let items = vec![
        create_test_item("id1", "Track 1", "2023-10-01T12:00:00Z", &["Artist A"]),
        create_test_item(
            "id2",
            "Track 2",
            "2023-10-02T12:00:00Z",
            &["Artist B", "Artist C"],
        ),
    ];

    let rows = track_table_rows(&items);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Track 1");
    assert_eq!(rows[0].artists, "Artist A");
    assert_eq!(rows[0].popularity, 42);
    assert_eq!(rows[0].added, "2023-10-01");
    assert_eq!(rows[1].artists, "Artist B, Artist C");
    assert_eq!(rows[1].added, "2023-10-02");
}

#[test]
fn test_sort_track_rows() {
    let mut rows = vec![
        create_test_row("Track A", "Artist Z", "2023-10-01"),
        create_test_row("Track C", "Artist A", "2023-10-03"),
        create_test_row("Track B", "Artist A", "2023-10-01"), // Same date, different name
        create_test_row("Track D", "Artist B", "2023-10-02"),
    ];

    sort_track_rows(&mut rows);

    // Should be sorted by added date descending, then by name ascending
    assert_eq!(rows[0].added, "2023-10-03"); // Most recent
    assert_eq!(rows[1].added, "2023-10-02");
    assert_eq!(rows[2].added, "2023-10-01");
    assert_eq!(rows[2].name, "Track A"); // Earlier alphabetically
    assert_eq!(rows[3].added, "2023-10-01");
    assert_eq!(rows[3].name, "Track B");
}
