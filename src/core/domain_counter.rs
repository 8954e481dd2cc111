use crate::domain::models::{DomainCount, SortOrder};
use crate::infra::diagnostics::DiagnosticSink;
use log::debug;
use std::collections::HashMap;

/// Returns the part after `@` when the address holds exactly one `@`.
pub fn split_domain(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(domain), None) => Some(domain),
        _ => None,
    }
}

pub fn sort_domains(domains: &mut [DomainCount], order: SortOrder) {
    match order {
        SortOrder::Ascending => domains.sort_unstable_by(|a, b| a.emails_count.cmp(&b.emails_count)),
        SortOrder::Descending => domains.sort_unstable_by(|a, b| b.emails_count.cmp(&a.emails_count)),
    }
}

/// Tallies emails per domain and returns the entries sorted by count.
///
/// Domains are compared as given, without case folding or trimming. Entries
/// that do not hold exactly one `@` go to `sink` and are left out of every
/// count.
pub fn count_by_domain<I, S>(
    emails: I,
    order: SortOrder,
    sink: &mut dyn DiagnosticSink,
) -> Vec<DomainCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally: HashMap<String, u64> = HashMap::new();
    let mut processed = 0usize;

    for email in emails {
        let email = email.as_ref();
        processed += 1;

        match split_domain(email) {
            Some(domain) => {
                // Only allocate for domains not yet seen.
                if let Some(count) = tally.get_mut(domain) {
                    *count += 1;
                } else {
                    tally.insert(domain.to_string(), 1);
                }
            }
            None => sink.invalid_email(email),
        }
    }

    let mut domains: Vec<DomainCount> = tally
        .into_iter()
        .map(|(name, emails_count)| DomainCount { name, emails_count })
        .collect();
    sort_domains(&mut domains, order);

    debug!(
        "Counted {} emails into {} domains ({:?})",
        processed,
        domains.len(),
        order
    );
    domains
}
