use super::{
    data::Table,
    notices::{Kind, Notices},
};
use crate::localization::titlecase;
use anyhow::{Context as _, Result};
use egui::Context;
use indexmap::IndexMap;
use poll_promise::Promise;
use serde::Deserialize;
use tracing::{error, info, instrument};

pub(crate) const URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Exchange rates body
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Rates {
    #[serde(default)]
    pub(crate) base: Option<String>,
    #[serde(default)]
    pub(crate) date: Option<String>,
    pub(crate) rates: IndexMap<String, f64>,
}

impl Rates {
    pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("unexpected exchange rates body")
    }

    /// One `[code, rate]` row per currency, in body order.
    pub(crate) fn to_table(&self) -> Table {
        Table::from_rows(
            self.rates
                .iter()
                .map(|(code, rate)| vec![code.clone(), rate.to_string()])
                .collect(),
        )
    }
}

/// Remote loader
///
/// Every fetch runs to completion on its own. Nothing deduplicates
/// overlapping fetches: results are applied in the order they are observed,
/// so the last response to arrive wins.
#[derive(Default)]
pub(crate) struct Loader {
    pending: Vec<Promise<Result<Rates>>>,
    pub(crate) last: Option<Rates>,
}

impl Loader {
    pub(crate) fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(crate) fn fetch(&mut self, context: &Context, url: &str) {
        info!(url, "fetch exchange rates");
        let context = context.clone();
        let url = url.to_owned();
        let future = async move {
            let result = fetch(url).await;
            context.request_repaint();
            result
        };
        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_async(future);
        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(future);
        self.pending.push(promise);
    }

    /// Takes the results of finished fetches, in pending order.
    pub(crate) fn poll(&mut self) -> Vec<Result<Rates>> {
        let mut finished = Vec::new();
        for promise in std::mem::take(&mut self.pending) {
            match promise.try_take() {
                Ok(result) => finished.push(result),
                Err(promise) => self.pending.push(promise),
            }
        }
        finished
    }

    /// Handles one finished fetch, returning the replacement table on success.
    pub(crate) fn complete(
        &mut self,
        result: Result<Rates>,
        notices: &mut Notices,
        now: f64,
    ) -> Option<Table> {
        match result {
            Ok(rates) => {
                info!(count = rates.rates.len(), "exchange rates loaded");
                let table = rates.to_table();
                notices.push(Kind::Info, titlecase!("rates_loaded"), now);
                self.last = Some(rates);
                Some(table)
            }
            Err(error) => {
                error!(%error);
                notices.push(
                    Kind::Error,
                    format!("{}: {error}", titlecase!("fetch_failed")),
                    now,
                );
                None
            }
        }
    }
}

#[instrument(err)]
async fn fetch(url: String) -> Result<Rates> {
    let response = reqwest::get(&url)
        .await
        .context("exchange rates request failed")?
        .error_for_status()?;
    let bytes = response.bytes().await?;
    Rates::from_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{data::Action, state::State};
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    const BODY: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "USD",
        "date": "2026-10-17",
        "time_last_updated": 1760659201,
        "rates": { "USD": 1, "EUR": 0.92, "JPY": 149.5 }
    }"#;

    #[test]
    fn rows_follow_body_order() {
        let rates = Rates::from_slice(BODY.as_bytes()).unwrap();
        assert_eq!(rates.base.as_deref(), Some("USD"));
        assert_eq!(
            rates.to_table().rows,
            vec![
                vec!["USD".to_owned(), "1".to_owned()],
                vec!["EUR".to_owned(), "0.92".to_owned()],
                vec!["JPY".to_owned(), "149.5".to_owned()],
            ],
        );
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(Rates::from_slice(b"<html>").is_err());
        assert!(Rates::from_slice(br#"{"base":"USD"}"#).is_err());
        assert!(Rates::from_slice(br#"{"rates":{"EUR":"x"}}"#).is_err());
    }

    #[test]
    fn failure_leaves_table_and_raises_notice() {
        let mut state = State::default();
        state.apply(Action::SetCell(0, 0, "kept".to_owned()));
        let before = state.clone();
        let mut loader = Loader::default();
        let mut notices = Notices::default();
        let (sender, promise) = Promise::new();
        loader.pending.push(promise);
        assert!(loader.is_loading());
        assert!(loader.poll().is_empty());
        assert!(loader.is_loading());
        sender.send(Err(anyhow!("connection refused")));
        for result in loader.poll() {
            if let Some(table) = loader.complete(result, &mut notices, 0.0) {
                state.apply(Action::Replace(table));
            }
        }
        assert!(!loader.is_loading());
        assert_eq!(state, before);
        assert_eq!(loader.last, None);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().map(|notice| notice.kind), Some(Kind::Error));
    }

    #[test]
    fn success_replaces_table() {
        let mut loader = Loader::default();
        let mut notices = Notices::default();
        let rates = Rates::from_slice(BODY.as_bytes()).unwrap();
        let replacement = loader.complete(Ok(rates.clone()), &mut notices, 0.0);
        assert_eq!(replacement, Some(rates.to_table()));
        assert_eq!(loader.last, Some(rates));
    }

    #[test]
    fn later_result_wins() {
        let mut state = State::default();
        let mut loader = Loader::default();
        let mut notices = Notices::default();
        let first = Rates {
            base: None,
            date: None,
            rates: IndexMap::from([("EUR".to_owned(), 0.9)]),
        };
        let second = Rates {
            base: None,
            date: None,
            rates: IndexMap::from([("GBP".to_owned(), 0.8)]),
        };
        for result in [Ok(first), Ok(second.clone())] {
            if let Some(table) = loader.complete(result, &mut notices, 0.0) {
                state.apply(Action::Replace(table));
            }
        }
        assert_eq!(*state.table, second.to_table());
    }
}
