use kasane::{annotate, SideChannel, TrackDescriptor, FORCED_SUBTITLE_ROLE, SIDECAR_MARKER};

fn sidecar_role(channel: &SideChannel) -> String {
    format!("{SIDECAR_MARKER}{}", channel.encode().unwrap())
}

#[test]
fn test_annotate_applies_fields_and_strips_marker() {
    let channel = SideChannel {
        language: Some("en".to_string()),
        forced: Some("YES".to_string()),
        ..Default::default()
    };
    let mut track = TrackDescriptor {
        language: "en-XA".to_string(),
        name: "English (Forced)".to_string(),
        roles: Some(vec![
            "public.accessibility.describes-video".to_string(),
            sidecar_role(&channel),
        ]),
        ..Default::default()
    };

    annotate(&mut track);

    assert_eq!(track.language, "en");
    assert!(track.forced);
    assert_eq!(track.name, "English (Forced)");
    assert_eq!(
        track.roles,
        Some(vec![
            "public.accessibility.describes-video".to_string(),
            FORCED_SUBTITLE_ROLE.to_string(),
        ])
    );
}

#[test]
fn test_annotate_overwrites_name_and_channels() {
    let channel = SideChannel {
        name: Some("日本語 (オーディオ)".to_string()),
        channels: Some("16/JOC".to_string()),
        ..Default::default()
    };
    let mut track = TrackDescriptor {
        language: "ja".to_string(),
        name: "Track 2".to_string(),
        channel_count: Some("2".to_string()),
        roles: Some(vec![sidecar_role(&channel)]),
        ..Default::default()
    };

    annotate(&mut track);

    assert_eq!(track.language, "ja");
    assert_eq!(track.name, "日本語 (オーディオ)");
    assert_eq!(track.channel_count.as_deref(), Some("16/JOC"));
    assert_eq!(track.channel_count_as_u32(), Some(16));
    // the only role was the marker, so roles are cleared entirely
    assert_eq!(track.roles, None);
}

#[test]
fn test_annotate_clears_placeholder_language() {
    let mut track = TrackDescriptor {
        language: "und-XA".to_string(),
        roles: Some(vec![sidecar_role(&SideChannel::default())]),
        ..Default::default()
    };

    annotate(&mut track);

    assert_eq!(track.language, "");
    assert_eq!(track.roles, None);
}

#[test]
fn test_annotate_keeps_real_language_when_payload_has_none() {
    let mut track = TrackDescriptor {
        language: "de".to_string(),
        roles: Some(vec![sidecar_role(&SideChannel::default())]),
        ..Default::default()
    };

    annotate(&mut track);

    assert_eq!(track.language, "de");
}

#[test]
fn test_annotate_without_marker_is_a_no_op() {
    let mut track = TrackDescriptor {
        language: "en".to_string(),
        roles: Some(vec!["public.accessibility.describes-video".to_string()]),
        ..Default::default()
    };
    let before = track.clone();

    annotate(&mut track);
    assert_eq!(track, before);

    track.roles = None;
    let before = track.clone();
    annotate(&mut track);
    assert_eq!(track, before);
}

#[test]
fn test_annotate_ignores_undecodable_payload() {
    let mut track = TrackDescriptor {
        language: "en-XA".to_string(),
        roles: Some(vec![format!("{SIDECAR_MARKER}not base64!!!")]),
        ..Default::default()
    };
    let before = track.clone();

    annotate(&mut track);

    // decode failure leaves everything untouched, marker included
    assert_eq!(track, before);
}

#[test]
fn test_annotate_is_idempotent_once_applied() {
    let channel = SideChannel {
        language: Some("en".to_string()),
        forced: Some("YES".to_string()),
        ..Default::default()
    };
    let mut track = TrackDescriptor {
        language: "en-XA".to_string(),
        roles: Some(vec![sidecar_role(&channel)]),
        ..Default::default()
    };

    annotate(&mut track);
    let applied = track.clone();

    annotate(&mut track);
    assert_eq!(track, applied);
    annotate(&mut track);
    assert_eq!(track, applied);
}

#[test]
fn test_annotate_consumes_only_the_first_marker() {
    let first = SideChannel {
        language: Some("en".to_string()),
        ..Default::default()
    };
    let second = SideChannel {
        language: Some("de".to_string()),
        ..Default::default()
    };
    let mut track = TrackDescriptor {
        roles: Some(vec![sidecar_role(&first), sidecar_role(&second)]),
        ..Default::default()
    };

    annotate(&mut track);
    assert_eq!(track.language, "en");
    assert_eq!(track.roles.as_ref().map(Vec::len), Some(1));
}
