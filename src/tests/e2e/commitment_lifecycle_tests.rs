use crate::modules::commitments::application::commitment_store::CommitmentStore;
use crate::modules::commitments::application::errors::StoreError;
use crate::modules::commitments::core::commitment::CommitmentPatch;
use crate::modules::commitments::use_cases::export_commitments::csv::export_csv;
use crate::modules::commitments::use_cases::list_commitments::query_view::{self, CategoryFilter};
use crate::shared::infrastructure::remote_client::Table;
use crate::tests::fixtures::app_state::seeded_remote;
use crate::tests::fixtures::commitments::CommitmentDraftBuilder;
use std::sync::Arc;

#[tokio::test]
async fn tracks_a_commitment_from_creation_to_removal() {
    let remote = seeded_remote().await;
    let store = Arc::new(CommitmentStore::new(remote.clone()));
    assert!(store.load().await.is_complete());
    assert_eq!(store.meeting_names().await, vec!["Budget Review"]);
    assert_eq!(store.responsible_names().await, vec!["Ana"]);

    let draft = CommitmentDraftBuilder::new()
        .category("OPS")
        .meeting_name("Weekly Sync")
        .theme("Rollout")
        .action("Ship the new release")
        .responsible("Rui")
        .build();
    let created = store.insert(draft).await.unwrap();

    let all = store.list().await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, created.id);

    let ops = query_view::apply(&all, &CategoryFilter::from("OPS"), "release");
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].id, created.id);

    let patch = CommitmentPatch { responsible: Some("Ana".into()), ..Default::default() };
    let updated = store.update(&created.id, patch).await.unwrap();
    assert_eq!(updated.responsible.as_deref(), Some("Ana"));
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(store.list().await[0], updated);

    let csv = export_csv(&store.list().await);
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().contains(r#""Weekly Sync""#));

    store.remove(&created.id).await.unwrap();
    assert!(store.get(&created.id).await.is_none());
    assert_eq!(remote.rows(Table::Commitments).await.len(), 2);

    assert_eq!(
        store.remove(&created.id).await,
        Err(StoreError::NotFound { id: created.id.clone() })
    );

    // A fresh load mirrors the remote exactly.
    let reloaded = CommitmentStore::new(remote);
    reloaded.load().await;
    assert_eq!(reloaded.list().await, store.list().await);
}
