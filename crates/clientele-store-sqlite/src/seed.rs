//! Demo data for a freshly created store.

use clientele_registry::{CustomerRepository, RepositoryError};
use clientele_types::{CustomerStatus, NewCustomer};

use crate::repository::SqliteCustomerRepository;

/// Sample customers: (name, email, phone, status).
const SAMPLE_CUSTOMERS: &[(&str, &str, &str, CustomerStatus)] = &[
    ("Alice Johnson", "alice.johnson@email.com", "+1-555-0101", CustomerStatus::Active),
    ("Bob Smith", "bob.smith@email.com", "+1-555-0102", CustomerStatus::Active),
    ("Carol White", "carol.white@email.com", "+1-555-0103", CustomerStatus::Active),
    ("David Brown", "david.brown@email.com", "+1-555-0104", CustomerStatus::Disabled),
    ("Eve Davis", "eve.davis@email.com", "+1-555-0105", CustomerStatus::Active),
    ("Frank Miller", "frank.miller@email.com", "+1-555-0106", CustomerStatus::Active),
    ("Grace Wilson", "grace.wilson@email.com", "+1-555-0107", CustomerStatus::Active),
    ("Henry Moore", "henry.moore@email.com", "+1-555-0108", CustomerStatus::Disabled),
    ("Iris Taylor", "iris.taylor@email.com", "+1-555-0109", CustomerStatus::Active),
    ("Jack Anderson", "jack.anderson@email.com", "+1-555-0110", CustomerStatus::Active),
];

impl SqliteCustomerRepository {
    /// Inserts the sample customers if the store is empty.
    ///
    /// Returns how many records were inserted (zero when data already exists).
    pub async fn seed_if_empty(&self) -> Result<usize, RepositoryError> {
        if self.stats().await?.total > 0 {
            return Ok(0);
        }
        for (name, email, phone, status) in SAMPLE_CUSTOMERS {
            let customer = self
                .add(NewCustomer::named(*name).with_email(*email).with_phone(*phone))
                .await?;
            if *status != CustomerStatus::Active {
                self.set_status(customer.id, *status).await?;
            }
        }
        tracing::info!(count = SAMPLE_CUSTOMERS.len(), "seeded sample customers");
        Ok(SAMPLE_CUSTOMERS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let repo = SqliteCustomerRepository::open_in_memory().expect("open");
        assert_eq!(repo.seed_if_empty().await.expect("seed"), 10);
        assert_eq!(repo.seed_if_empty().await.expect("reseed"), 0);

        let stats = repo.stats().await.expect("stats");
        assert_eq!(stats.total, 10);
        assert_eq!(stats.active, 8);
        assert_eq!(stats.disabled, 2);
    }
}
