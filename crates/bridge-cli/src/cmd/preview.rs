use crate::output::print_json;
use anyhow::{Context, Result};
use bridge_core::types::Pod;
use bridge_core::workflow::{self, OrderWarning};
use bridge_core::{message, BridgeError};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Render the Slack message for a handoff without sending it.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Pod snapshot as JSON (the `pod` object the front-end submits)
    pub file: PathBuf,

    /// Id of the member who just finished
    #[arg(long)]
    pub member: String,

    /// Handoff link to include
    #[arg(long, default_value = "")]
    pub link: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Preview<'a> {
    text: String,
    next_member_name: Option<&'a str>,
    warnings: Vec<OrderWarning>,
}

pub fn run(args: PreviewArgs, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .map_err(BridgeError::from)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let pod: Pod = serde_json::from_str(&raw)
        .map_err(BridgeError::from)
        .with_context(|| format!("{} is not a valid pod", args.file.display()))?;

    let resolution = workflow::resolve(&pod.members, &args.member);
    let text = message::compose(&pod.name, &resolution, &args.link)
        .ok_or_else(|| BridgeError::MemberNotFound(args.member.clone()))?;

    let preview = Preview {
        text,
        next_member_name: resolution.next().map(|m| m.name.as_str()),
        warnings: workflow::check_order(&pod),
    };

    if json {
        return print_json(&preview);
    }

    for w in &preview.warnings {
        eprintln!("warning: {w}");
    }
    println!("{}", preview.text);
    Ok(())
}
