use crate::models::{MonthlyXpBucket, Transaction};
use chrono::Local;

/// The fixed dashboard window, in display order.
pub const MONTH_LABELS: [&str; 6] = ["Apr", "May", "Jun", "Jul", "Aug", "Sep"];

/// Buckets transactions into one total per label, in label order. A
/// transaction whose month falls outside the label set is dropped, not an
/// error. Output order follows `labels` regardless of transaction order.
pub fn aggregate_monthly_xp(transactions: &[Transaction], labels: &[&str]) -> Vec<MonthlyXpBucket> {
    let mut buckets: Vec<MonthlyXpBucket> = labels
        .iter()
        .map(|label| MonthlyXpBucket {
            month: label.to_string(),
            xp: 0,
        })
        .collect();

    for transaction in transactions {
        let label = month_label(transaction);
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.month == label) {
            bucket.xp += transaction.amount;
        }
    }

    buckets
}

fn month_label(transaction: &Transaction) -> String {
    transaction
        .created_at
        .with_timezone(&Local)
        .format("%b")
        .to_string()
}
