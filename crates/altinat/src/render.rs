//! Plain-text rendering of feed sections

use altinat_core::{Bucket, FriendList, LikedSet, Observation};
use altinat_feed::CycleReport;
use std::fmt::Write;

pub struct RenderOptions<'a> {
    pub liked: &'a LikedSet,
    pub preview_chars: usize,
}

/// One observation as a short card
pub fn observation_card(obs: &Observation, opts: &RenderOptions) -> String {
    let heart = if opts.liked.contains(obs.id) { "♥" } else { "♡" };
    let mut out = format!("{} #{} {}", heart, obs.id, obs.display_name());
    if let Some(name) = obs.scientific_name() {
        let _ = write!(out, " ({})", name);
    }
    let _ = write!(
        out,
        "\n      Location: {}",
        obs.place_guess.as_deref().unwrap_or("")
    );
    if let Some(preview) = obs
        .description_preview(opts.preview_chars)
        .filter(|p| !p.is_empty())
    {
        let _ = write!(out, "\n      {}", preview);
    }
    if let Some(photo) = obs.medium_photo_url() {
        let _ = write!(out, "\n      Photo: {}", photo);
    }
    if !obs.uri.is_empty() {
        let _ = write!(out, "\n      {}", obs.uri);
    }
    out
}

/// A titled section with one block per friend, in tracking order
pub fn section(title: &str, friends: &FriendList, bucket: &Bucket, opts: &RenderOptions) -> String {
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.chars().count()));
    for login in friends.iter() {
        let _ = writeln!(out, "  {}", login);
        let items = bucket.get(login);
        if items.is_empty() {
            let _ = writeln!(out, "    No observations for {} in this period.", login);
            continue;
        }
        for obs in items {
            let _ = writeln!(out, "    {}", observation_card(obs, opts));
        }
    }
    out
}

pub fn observation_list(title: &str, items: &[&Observation], empty: &str, opts: &RenderOptions) -> String {
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.chars().count()));
    if items.is_empty() {
        let _ = writeln!(out, "  {}", empty);
        return out;
    }
    for obs in items {
        let _ = writeln!(out, "  {} by {}", observation_card(obs, opts), obs.login());
    }
    out
}

/// One-line summary of a fetch cycle
pub fn report_line(report: &CycleReport) -> String {
    match report {
        CycleReport::Skipped { .. } => "No friends tracked yet.".to_string(),
        CycleReport::Applied {
            observations,
            new_since_last_visit,
            ..
        } => format!(
            "Loaded {} observations ({} new since last visit).",
            observations, new_since_last_visit
        ),
        CycleReport::Failed { error, .. } => format!("Could not load observations: {}", error),
        CycleReport::Stale { .. } => "Superseded by a newer fetch.".to_string(),
    }
}
