use contracts::dashboards::d400_sales_overview::{FilterDomain, SalesFilter, SalesFilterRequest};
use contracts::projections::p910_sales_orders::OrderRecord;
use std::collections::BTreeSet;

/// Selectable domain of the orders: date bounds and sorted distinct values.
///
/// `None` when there are no orders at all.
pub fn filter_domain(orders: &[OrderRecord]) -> Option<FilterDomain> {
    let min_date = orders.iter().map(|o| o.date).min()?;
    let max_date = orders.iter().map(|o| o.date).max()?;

    Some(FilterDomain {
        min_date,
        max_date,
        states: distinct(orders, |o| o.state.as_str()),
        channels: distinct(orders, |o| o.channel.as_str()),
        categories: distinct(orders, |o| o.category.as_str()),
    })
}

fn distinct<'a>(orders: &'a [OrderRecord], field: impl Fn(&'a OrderRecord) -> &'a str) -> Vec<String> {
    orders
        .iter()
        .map(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn or_all(selected: &[String], all: &[String]) -> Vec<String> {
    if selected.is_empty() {
        all.to_vec()
    } else {
        selected.to_vec()
    }
}

/// Resolves a client request against the domain: empty selections and missing dates mean "all"
pub fn resolve(domain: &FilterDomain, request: &SalesFilterRequest) -> SalesFilter {
    SalesFilter {
        date_from: request.date_from.unwrap_or(domain.min_date),
        date_to: request.date_to.unwrap_or(domain.max_date),
        states: or_all(&request.states, &domain.states),
        channels: or_all(&request.channels, &domain.channels),
        categories: or_all(&request.categories, &domain.categories),
    }
}

/// Filter state of one analyst session.
///
/// Starts with everything selected; `reset` goes back there.
#[derive(Debug, Clone)]
pub struct FilterSession {
    domain: FilterDomain,
    current: SalesFilter,
}

impl FilterSession {
    pub fn new(domain: FilterDomain) -> Self {
        let current = SalesFilter::from(&domain);
        Self { domain, current }
    }

    pub fn domain(&self) -> &FilterDomain {
        &self.domain
    }

    pub fn current(&self) -> &SalesFilter {
        &self.current
    }

    pub fn reset(&mut self) -> &SalesFilter {
        self.current = SalesFilter::from(&self.domain);
        &self.current
    }

    pub fn apply(&mut self, request: &SalesFilterRequest) -> &SalesFilter {
        self.current = resolve(&self.domain, request);
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::test_support::{date, order};

    fn domain() -> FilterDomain {
        FilterDomain {
            min_date: date(1, 1),
            max_date: date(3, 31),
            states: vec!["MG".into(), "RJ".into(), "SP".into()],
            channels: vec!["E-commerce".into(), "Marketplace".into()],
            categories: vec!["Notebooks".into(), "Smartphones".into()],
        }
    }

    #[test]
    fn test_new_session_selects_everything() {
        let session = FilterSession::new(domain());
        let current = session.current();
        assert_eq!(current.date_from, date(1, 1));
        assert_eq!(current.date_to, date(3, 31));
        assert_eq!(current.states, domain().states);
        assert_eq!(current.channels, domain().channels);
        assert_eq!(current.categories, domain().categories);
    }

    #[test]
    fn test_empty_state_selection_means_all_states() {
        let mut session = FilterSession::new(domain());
        let request = SalesFilterRequest {
            channels: vec!["Marketplace".into()],
            ..Default::default()
        };
        let resolved = session.apply(&request).clone();
        assert_eq!(resolved.states, vec!["MG", "RJ", "SP"]);
        assert_eq!(resolved.channels, vec!["Marketplace"]);
        assert_eq!(resolved.categories, domain().categories);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = FilterSession::new(domain());
        session.apply(&SalesFilterRequest {
            date_from: Some(date(2, 1)),
            states: vec!["SP".into()],
            ..Default::default()
        });
        assert_eq!(session.current().states, vec!["SP"]);
        assert_eq!(session.current().date_from, date(2, 1));
        assert_eq!(session.current().date_to, date(3, 31));

        let reset = session.reset().clone();
        assert_eq!(reset, SalesFilter::from(session.domain()));
    }

    #[test]
    fn test_filter_domain_from_orders() {
        assert!(filter_domain(&[]).is_none());

        let orders = vec![
            order("P1", date(2, 10), "SP", "Marketplace", "Notebooks", 10.0),
            order("P2", date(1, 5), "RJ", "E-commerce", "Notebooks", 10.0),
            order("P3", date(3, 2), "SP", "E-commerce", "Accessories", 10.0),
        ];
        let domain = filter_domain(&orders).unwrap();
        assert_eq!(domain.min_date, date(1, 5));
        assert_eq!(domain.max_date, date(3, 2));
        assert_eq!(domain.states, vec!["RJ", "SP"]);
        assert_eq!(domain.channels, vec!["E-commerce", "Marketplace"]);
        assert_eq!(domain.categories, vec!["Accessories", "Notebooks"]);
    }
}
