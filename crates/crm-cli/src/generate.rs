//! The `generate` command: a seeded dump of dirty legacy customer records.
//!
//! The dump mimics what the legacy system exports: `;`-separated, mixed
//! account status encodings, three date layouts, missing phones and dates,
//! and customers sharing an email address. The same seed always produces
//! the same file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use rand::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span};

pub const DEFAULT_RECORD_COUNT: usize = 5_000;
pub const DEFAULT_SEED: u64 = 42;

/// First `client_id` handed out; ids increase by one per record.
pub const FIRST_CLIENT_ID: u64 = 1_000;

/// Legacy status encodings with their share of the dump.
const ACCOUNT_STATUSES: [(&str, f64); 5] = [
    ("0", 0.15),
    ("1", 0.5),
    ("Y", 0.05),
    ("N", 0.2),
    ("Active", 0.1),
];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];
const MISSING_DATE_RATE: f64 = 0.01;
const MISSING_PHONE_RATE: f64 = 0.05;
const DUPLICATE_EMAIL_RATE: f64 = 0.1;
/// Registration dates fall within this many days after 2015-01-01.
const REGISTRATION_WINDOW_DAYS: u64 = 4_000;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace",
    "Jean", "John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia",
    "Shafi", "Tim",
];
const LAST_NAMES: &[&str] = &[
    "Allen", "Bartik", "Berners-Lee", "Dijkstra", "Goldwasser", "Hamilton", "Hopper",
    "Johnson", "Knuth", "Lamport", "Liskov", "Lovelace", "Perlman", "Ritchie", "Shannon",
    "Thompson", "Torvalds", "Turing", "Wirth",
];
const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

/// Resolved options for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub count: usize,
    pub seed: u64,
}

impl GenerateOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub records: usize,
    /// Records whose email was reused from an earlier record.
    pub duplicate_emails: usize,
}

/// Header of the legacy dump, matching the field order of [`LegacyRow`].
pub const LEGACY_COLUMNS: [&str; 6] = [
    "client_id",
    "full_name",
    "email",
    "phone",
    "registration_date",
    "account_status",
];

/// One row of the legacy dump, in the legacy column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRow {
    pub client_id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registration_date: Option<String>,
    pub account_status: &'static str,
}

/// Emails handed out so far, so later records can reuse one.
#[derive(Debug, Clone)]
pub struct EmailPool {
    issued: Vec<String>,
    duplicate_rate: f64,
    duplicates: usize,
}

impl EmailPool {
    pub fn new(duplicate_rate: f64) -> Self {
        Self {
            issued: Vec::new(),
            duplicate_rate,
            duplicates: 0,
        }
    }

    /// Returns an earlier email with probability `duplicate_rate`, otherwise
    /// a fresh address built from the name. Fresh addresses never repeat.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, first: &str, last: &str) -> String {
        if !self.issued.is_empty()
            && rng.random::<f64>() < self.duplicate_rate
            && let Some(email) = self.issued.choose(rng)
        {
            self.duplicates += 1;
            return email.clone();
        }
        let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
        let email = format!(
            "{}.{}{}@{domain}",
            first.to_lowercase(),
            last.to_lowercase(),
            self.issued.len() + 1
        );
        self.issued.push(email.clone());
        email
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn issued(&self) -> &[String] {
        &self.issued
    }
}

impl Default for EmailPool {
    fn default() -> Self {
        Self::new(DUPLICATE_EMAIL_RATE)
    }
}

/// Builds `count` legacy rows from `seed`.
pub fn generate_rows(count: usize, seed: u64, emails: &mut EmailPool) -> Vec<LegacyRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Ada");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Lovelace");
            LegacyRow {
                client_id: FIRST_CLIENT_ID + index as u64,
                full_name: format!("{first} {last}"),
                email: emails.draw(&mut rng, first, last),
                phone: dirty_phone(&mut rng),
                registration_date: dirty_date(&mut rng),
                account_status: account_status(&mut rng),
            }
        })
        .collect()
}

/// Writes a generated dump to `options.output`.
pub fn generate_dump(options: &GenerateOptions) -> Result<GenerateReport> {
    let span = info_span!("generate", output = %options.output.display());
    let _guard = span.enter();
    info!(records = options.count, seed = options.seed, "generating legacy dump");

    let mut emails = EmailPool::default();
    let rows = generate_rows(options.count, options.seed, &mut emails);
    write_rows(&options.output, &rows)
        .with_context(|| format!("write {}", options.output.display()))?;

    debug!(
        duplicate_emails = emails.duplicates(),
        distinct_emails = emails.issued().len(),
        "email pool drained"
    );
    Ok(GenerateReport {
        output: options.output.clone(),
        records: rows.len(),
        duplicate_emails: emails.duplicates(),
    })
}

fn write_rows(path: &Path, rows: &[LegacyRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(LEGACY_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn account_status<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let roll = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (status, share) in ACCOUNT_STATUSES {
        cumulative += share;
        if roll < cumulative {
            return status;
        }
    }
    ACCOUNT_STATUSES[ACCOUNT_STATUSES.len() - 1].0
}

fn dirty_date<R: Rng + ?Sized>(rng: &mut R) -> Option<String> {
    let format = DATE_FORMATS.choose(rng).copied().unwrap_or(DATE_FORMATS[0]);
    if rng.random::<f64>() < MISSING_DATE_RATE {
        return None;
    }
    let start = NaiveDate::from_ymd_opt(2015, 1, 1)?;
    let offset = Days::new(rng.random_range(0..REGISTRATION_WINDOW_DAYS));
    let date = start.checked_add_days(offset)?;
    Some(date.format(format).to_string())
}

fn dirty_phone<R: Rng + ?Sized>(rng: &mut R) -> Option<String> {
    if rng.random::<f64>() < MISSING_PHONE_RATE {
        return None;
    }
    let area = rng.random_range(200..1_000_u32);
    let exchange = rng.random_range(200..1_000_u32);
    let line = rng.random_range(0..10_000_u32);
    let phone = match rng.random_range(0..3_u8) {
        0 => format!("{area}-{exchange}-{line:04}"),
        1 => format!("({area}) {exchange}-{line:04}"),
        _ => format!("+1 {area} {exchange} {line:04}"),
    };
    Some(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_ids_are_sequential_from_first_id() {
        let rows = generate_rows(3, 7, &mut EmailPool::default());
        let ids: Vec<u64> = rows.iter().map(|row| row.client_id).collect();
        assert_eq!(ids, [1_000, 1_001, 1_002]);
    }

    #[test]
    fn same_seed_same_rows() {
        let first = generate_rows(50, 11, &mut EmailPool::default());
        let second = generate_rows(50, 11, &mut EmailPool::default());
        assert_eq!(first, second);
        assert_ne!(first, generate_rows(50, 12, &mut EmailPool::default()));
    }

    #[test]
    fn statuses_come_from_legacy_encodings() {
        let rows = generate_rows(500, 3, &mut EmailPool::default());
        let known: Vec<&str> = ACCOUNT_STATUSES.iter().map(|(status, _)| *status).collect();
        assert!(rows.iter().all(|row| known.contains(&row.account_status)));
        assert!(rows.iter().any(|row| row.account_status == "1"));
    }

    #[test]
    fn pool_reuses_only_issued_emails() {
        let mut pool = EmailPool::new(1.0);
        let mut rng = StdRng::seed_from_u64(5);
        let first = pool.draw(&mut rng, "Grace", "Hopper");
        assert!(first.starts_with("grace.hopper1@"));
        assert_eq!(pool.draw(&mut rng, "Alan", "Turing"), first);
        assert_eq!(pool.duplicates(), 1);
        assert_eq!(pool.issued().len(), 1);
    }

    #[test]
    fn pool_without_duplicates_issues_fresh_emails() {
        let mut pool = EmailPool::new(0.0);
        let rows = generate_rows(20, 9, &mut pool);
        assert_eq!(pool.duplicates(), 0);
        assert_eq!(pool.issued().len(), rows.len());
    }

    #[test]
    fn shares_sum_to_one() {
        let total: f64 = ACCOUNT_STATUSES.iter().map(|(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
