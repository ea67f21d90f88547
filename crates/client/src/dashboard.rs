//! The admin dashboard: one listing fetch, client-side counts, and a table.
//!
//! The listing is fetched once. There is no polling or refresh. A failed
//! fetch is logged and renders exactly like an empty listing.

use std::fmt::Write as _;

use survey_core::survey::SurveyResponse;

use crate::api::SurveyBackend;
use crate::stats::{AccessoryStats, Badge};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    /// Responses in the order received (newest first).
    Loaded(Vec<SurveyResponse>),
}

/// One table row as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow<'a> {
    /// 1-based position in the listing.
    pub index: usize,
    pub full_name: &'a str,
    pub accessory_type: &'a str,
    pub badge: Badge,
    pub color_preference: &'a str,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    state: DashboardState,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DashboardState::Loading)
    }

    /// Fetch the listing once. Calls after the first completed load do nothing.
    pub async fn load<B>(&mut self, backend: &B)
    where
        B: SurveyBackend + ?Sized,
    {
        if !self.is_loading() {
            return;
        }

        let responses = match backend.fetch_responses().await {
            Ok(responses) => {
                tracing::info!(count = responses.len(), "Loaded survey responses");
                responses
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load survey responses");
                Vec::new()
            }
        };

        self.state = DashboardState::Loaded(responses);
    }

    /// Summary counts, once loaded.
    pub fn stats(&self) -> Option<AccessoryStats> {
        match &self.state {
            DashboardState::Loading => None,
            DashboardState::Loaded(responses) => Some(AccessoryStats::from_responses(responses)),
        }
    }

    /// Table rows in received order. Empty while loading.
    pub fn rows(&self) -> Vec<DashboardRow<'_>> {
        let DashboardState::Loaded(responses) = &self.state else {
            return Vec::new();
        };

        responses
            .iter()
            .enumerate()
            .map(|(i, r)| DashboardRow {
                index: i + 1,
                full_name: &r.full_name,
                accessory_type: &r.accessory_type,
                badge: Badge::for_accessory(&r.accessory_type),
                color_preference: &r.color_preference,
            })
            .collect()
    }

    /// Text rendition of the current view.
    pub fn render(&self) -> String {
        let Some(stats) = self.stats() else {
            return "⏳ Đang tải dữ liệu...\n".to_string();
        };

        let mut out = String::new();
        out.push_str("📊 Quản Lý Đơn Hàng\n\n");

        for (title, count) in [
            ("Tổng đơn", stats.total),
            ("Vòng tay", stats.bracelet),
            ("Móc khóa", stats.keychain),
            ("Dây treo", stats.phone_strap),
        ] {
            let _ = writeln!(out, "{title:<10} {count}");
        }
        out.push('\n');

        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<30} {}",
            "#", "Họ và Tên", "Phụ kiện", "Màu sắc"
        );

        let rows = self.rows();
        if rows.is_empty() {
            out.push_str("Chưa có dữ liệu nào\n");
            return out;
        }

        for row in rows {
            let tagged = format!("[{}] {}", row.badge.name(), row.accessory_type);
            let _ = writeln!(
                out,
                "{:<4} {:<24} {:<30} {}",
                row.index, row.full_name, tagged, row.color_preference
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use survey_core::survey::{SubmitAck, SubmitSurvey};

    use super::*;
    use crate::api::ClientError;

    struct ListingBackend {
        listing: Option<Vec<SurveyResponse>>,
        fetches: AtomicUsize,
    }

    impl ListingBackend {
        fn with(accessories: &[&str]) -> Self {
            let count = accessories.len();
            let listing = accessories
                .iter()
                .enumerate()
                .map(|(i, accessory)| SurveyResponse {
                    id: (count - i) as i64,
                    full_name: format!("Respondent {}", count - i),
                    accessory_type: accessory.to_string(),
                    color_preference: "Red".to_string(),
                })
                .collect();
            Self {
                listing: Some(listing),
                fetches: AtomicUsize::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                listing: None,
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SurveyBackend for ListingBackend {
        async fn submit(&self, _survey: &SubmitSurvey) -> Result<SubmitAck, ClientError> {
            unreachable!("dashboard never submits")
        }

        async fn fetch_responses(&self) -> Result<Vec<SurveyResponse>, ClientError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.listing.clone().ok_or_else(|| ClientError::Api {
                status: 500,
                body: r#"{"error":"server error"}"#.into(),
            })
        }
    }

    #[test]
    fn renders_loading_before_fetch() {
        let dashboard = Dashboard::new();
        assert!(dashboard.is_loading());
        assert!(dashboard.stats().is_none());
        assert!(dashboard.rows().is_empty());
        assert!(dashboard.render().contains("Đang tải dữ liệu"));
    }

    #[tokio::test]
    async fn counts_known_accessories() {
        let backend = ListingBackend::with(&["Vòng tay", "Móc khóa", "Móc khóa"]);
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;

        assert_eq!(
            dashboard.stats(),
            Some(AccessoryStats {
                total: 3,
                bracelet: 1,
                keychain: 2,
                phone_strap: 0,
            })
        );
    }

    #[tokio::test]
    async fn unknown_accessory_is_in_total_only_and_gets_fallback_badge() {
        let backend = ListingBackend::with(&["Unknown", "Vòng tay"]);
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;

        let stats = dashboard.stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.bracelet + stats.keychain + stats.phone_strap, 1);
        assert_eq!(dashboard.rows()[0].badge, Badge::Pink);
    }

    #[tokio::test]
    async fn rows_keep_received_order_with_one_based_index() {
        let backend = ListingBackend::with(&["Móc khóa", "Vòng tay", "Dây treo điện thoại"]);
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;

        let rows = dashboard.rows();
        let indexes: Vec<_> = rows.iter().map(|r| r.index).collect();
        let names: Vec<_> = rows.iter().map(|r| r.full_name).collect();
        let badges: Vec<_> = rows.iter().map(|r| r.badge).collect();

        assert_eq!(indexes, [1, 2, 3]);
        assert_eq!(names, ["Respondent 3", "Respondent 2", "Respondent 1"]);
        assert_eq!(badges, [Badge::Purple, Badge::Blue, Badge::Pink]);
    }

    #[tokio::test]
    async fn loads_only_once() {
        let backend = ListingBackend::with(&["Vòng tay"]);
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;
        dashboard.load(&backend).await;

        assert_eq!(backend.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_failure_renders_as_empty_listing() {
        let backend = ListingBackend::unreachable();
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;

        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.state(), &DashboardState::Loaded(Vec::new()));
        assert_eq!(dashboard.stats(), Some(AccessoryStats::default()));

        let view = dashboard.render();
        assert!(view.contains("Chưa có dữ liệu nào"));
        assert!(view
            .lines()
            .any(|l| l.starts_with("Tổng đơn") && l.trim_end().ends_with(" 0")));
    }

    #[tokio::test]
    async fn render_tags_accessories() {
        let backend = ListingBackend::with(&["Vòng tay"]);
        let mut dashboard = Dashboard::new();
        dashboard.load(&backend).await;

        let view = dashboard.render();
        assert!(view.contains("[blue] Vòng tay"));
        assert!(view.contains("Respondent 1"));
    }
}
