//! Merge of a remote batch into the local collection

use crate::quotes::QuoteRepository;
use crate::types::quote::Quote;

/// What a reconciliation pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Remote quotes whose text was unknown locally
    pub new_quotes: usize,
    /// Local quotes whose category was overwritten by the remote one
    pub conflicts_resolved: usize,
}

impl SyncReport {
    pub fn has_changes(&self) -> bool {
        self.new_quotes > 0 || self.conflicts_resolved > 0
    }

    /// Message for the notice banner
    pub fn summary(&self) -> String {
        format!(
            "Quotes synced with server: {} new, {} conflicts resolved.",
            self.new_quotes, self.conflicts_resolved
        )
    }
}

/// Merge `remote` into `repo`
///
/// Matching is by exact text. Unknown quotes are appended; known quotes with a
/// different category take the remote category. Remote quotes with empty text
/// never match and are always appended.
pub fn reconcile(repo: &mut QuoteRepository, remote: Vec<Quote>) -> SyncReport {
    let mut report = SyncReport::default();

    for server_quote in remote {
        let existing = if server_quote.text.is_empty() {
            None
        } else {
            repo.position_by_text(&server_quote.text)
        };

        match existing {
            None => {
                repo.add(server_quote);
                report.new_quotes += 1;
            }
            Some(index) => {
                if repo.quotes()[index].category != server_quote.category {
                    tracing::debug!(
                        "Category conflict on {:?}: {:?} -> {:?}",
                        server_quote.text,
                        repo.quotes()[index].category,
                        server_quote.category
                    );
                    repo.update_category(index, server_quote.category);
                    report.conflicts_resolved += 1;
                }
            }
        }
    }

    report
}
