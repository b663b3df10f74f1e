use crate::infra::InMemoryLetterStore;
use clap::Args;
use serde_json::json;
use siwarga::error::AppError;
use siwarga::letters::{
    AttachmentRequest, LetterService, Principal, Role, SubmissionAction, UserId,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Letter type to request (defaults to "Surat Pengantar KTP")
    #[arg(long)]
    pub(crate) letter_type: Option<String>,
    /// Skip the revision round and approve on first review
    #[arg(long)]
    pub(crate) skip_revision: bool,
    /// Print the final detail view as pretty JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// Walk one submission from creation through review to approval, narrating
/// each step on stdout.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let letter_type = args
        .letter_type
        .unwrap_or_else(|| "Surat Pengantar KTP".to_string());

    let store = Arc::new(InMemoryLetterStore::default());
    let service = LetterService::new(store);

    let resident = Principal {
        id: UserId(1),
        role: Role::Citizen,
    };
    let reviewer = Principal {
        id: UserId(2),
        role: Role::Admin,
    };

    println!("Resident letter-request demo");

    let submission = service.create(
        &resident,
        &letter_type,
        json!({
            "full_name": "Siti Rahma",
            "address": "RT 03 / RW 05, Kelurahan Mekarsari",
            "note": "Perpanjangan KTP"
        }),
    )?;
    println!(
        "\nCreated submission #{} ({}) with status {}",
        submission.id, submission.letter_type, submission.status
    );

    let file_name = "kartu-keluarga.pdf";
    let attachment = service.attach_file(
        submission.id,
        &resident,
        AttachmentRequest {
            document_type: "Fotokopi Kartu Keluarga".to_string(),
            original_name: file_name.to_string(),
            mime_type: mime_guess::from_path(file_name)
                .first_or_octet_stream()
                .to_string(),
            size_bytes: 48_213,
            storage_handle: format!("demo/{file_name}"),
        },
    )?;
    println!(
        "Attached '{}' as {} ({}, {} bytes)",
        attachment.original_name, attachment.document_type, attachment.mime_type,
        attachment.size_bytes
    );

    // Show the guard rail before walking the legal path.
    match service.apply_action(submission.id, &reviewer, SubmissionAction::Approve, None) {
        Err(err) => println!("Early approval rejected as expected: {err}"),
        Ok(_) => println!("Unexpected: early approval was accepted"),
    }

    let mut chain = vec![SubmissionAction::SetInReview];
    if !args.skip_revision {
        chain.push(SubmissionAction::RequestRevision);
        chain.push(SubmissionAction::SetInReview);
    }
    chain.push(SubmissionAction::Approve);

    for action in chain {
        let outcome = service.apply_action(
            submission.id,
            &reviewer,
            action,
            Some("diperiksa oleh pengurus RW".to_string()),
        )?;
        println!("Applied {} -> status {}", action, outcome.submission.status);
    }

    let detail = service.detail(submission.id, &resident)?;
    println!("\nChecklist for {}:", detail.submission.letter_type);
    for item in &detail.checklist {
        let mark = if item.satisfied { "x" } else { " " };
        println!("  [{mark}] {}", item.label);
    }

    println!("\nAudit trail ({} entries):", detail.logs.len());
    for entry in &detail.logs {
        println!(
            "  {} by user {} at {}",
            entry.action,
            entry.actor_id,
            entry.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&detail)
            .unwrap_or_else(|err| format!("<detail not serializable: {err}>"));
        println!("\n{rendered}");
    }

    Ok(())
}
