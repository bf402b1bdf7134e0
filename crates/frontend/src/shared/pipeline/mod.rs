//! Screens of the fulfillment stages (printing, packing, shipping, sweeping).
//!
//! Each stage page has two parts: the server-computed ready queue, where orders
//! are selected and processed in bulk with one `POST`, and the history of the
//! records the stage created, filterable by date.

pub mod history;
pub mod ready_queue;

use crate::shared::components::PageHeader;
use crate::shared::crud::Column;
use crate::shared::toast::ToastKind;
use contracts::domain::common::Record;
use contracts::enums::order_status::PipelineStage;
use contracts::shared::bulk::BulkResult;
use history::StageHistory;
use leptos::prelude::*;
use ready_queue::ReadyQueue;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Toast for a bulk action on `requested` orders that the server accepted.
///
/// Counts from the response are used when present; a summary reporting fewer
/// processed orders than requested, or skipped ones, is a warning.
pub fn bulk_toast(
    stage: PipelineStage,
    result: &BulkResult,
    requested: usize,
) -> (ToastKind, String, String) {
    let skipped = result.skipped.unwrap_or(0);
    let partial = skipped > 0 || result.processed.is_some_and(|p| p < requested);
    let message = result.message.clone().unwrap_or_else(|| {
        let mut text = match result.processed {
            Some(processed) => format!("{} dari {} pesanan diproses", processed, requested),
            None => format!("{} pesanan diproses", requested),
        };
        if skipped > 0 {
            text.push_str(&format!(", {} dilewati", skipped));
        }
        text
    });
    if partial {
        (ToastKind::Warning, format!("{} sebagian", stage.title()), message)
    } else {
        (ToastKind::Success, format!("{} berhasil", stage.title()), message)
    }
}

/// Ready queue plus history of one stage.
#[component]
pub fn StagePage<R>(
    stage: PipelineStage,
    subtitle: &'static str,
    history_columns: &'static [Column<R>],
) -> impl IntoView
where
    R: Record + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    view! {
        <div class="page">
            <PageHeader title=stage.title() subtitle=subtitle />
            <ReadyQueue stage=stage />
            <StageHistory stage=stage columns=history_columns />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(processed: Option<usize>, skipped: Option<usize>) -> BulkResult {
        BulkResult {
            processed,
            skipped,
            message: None,
        }
    }

    #[test]
    fn test_bulk_toast_kinds() {
        let (kind, title, message) = bulk_toast(PipelineStage::Print, &result(Some(3), None), 3);
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(title, "Pencetakan berhasil");
        assert_eq!(message, "3 dari 3 pesanan diproses");

        let (kind, title, message) = bulk_toast(PipelineStage::Pack, &result(Some(2), Some(1)), 3);
        assert_eq!(kind, ToastKind::Warning);
        assert_eq!(title, "Packing sebagian");
        assert_eq!(message, "2 dari 3 pesanan diproses, 1 dilewati");
    }

    #[test]
    fn test_accepted_action_without_counts_is_success() {
        for body in ["", "{}", r#"{"message": "OK"}"#, r#"[{"id": 9}]"#] {
            let (kind, title, _) = bulk_toast(PipelineStage::Ship, &BulkResult::from_body(body), 4);
            assert_eq!(kind, ToastKind::Success, "body {:?}", body);
            assert_eq!(title, "Pengiriman berhasil");
        }
        let (_, _, message) = bulk_toast(PipelineStage::Ship, &BulkResult::default(), 4);
        assert_eq!(message, "4 pesanan diproses");
    }

    #[test]
    fn test_zero_processed_is_a_warning_not_an_error() {
        let (kind, _, message) = bulk_toast(PipelineStage::Sweep, &result(Some(0), Some(3)), 3);
        assert_eq!(kind, ToastKind::Warning);
        assert_eq!(message, "0 dari 3 pesanan diproses, 3 dilewati");
    }

    #[test]
    fn test_server_message_wins() {
        let r = BulkResult {
            processed: Some(1),
            skipped: None,
            message: Some("Label siap dicetak".into()),
        };
        assert_eq!(bulk_toast(PipelineStage::Print, &r, 1).2, "Label siap dicetak");
    }
}
