//! Read-only report screens
//!
//! Each screen fetches once when mounted and never mutates anything.

use shared::{DashboardStats, InventoryReport, Language, RevenueReport};

use crate::api::ApiClient;
use crate::error::{ConsoleResult, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Home screen cards
    Dashboard,
    Inventory,
    Revenue,
    /// Combined summary of the dashboard figures
    Summary,
}

impl ReportKind {
    pub fn title(&self, language: Language) -> &'static str {
        match (self, language) {
            (ReportKind::Dashboard, Language::Vietnamese) => "Tổng quan",
            (ReportKind::Dashboard, Language::English) => "Dashboard",
            (ReportKind::Inventory, Language::Vietnamese) => "Báo cáo tồn kho",
            (ReportKind::Inventory, Language::English) => "Inventory report",
            (ReportKind::Revenue, Language::Vietnamese) => "Báo cáo doanh thu",
            (ReportKind::Revenue, Language::English) => "Revenue report",
            (ReportKind::Summary, Language::Vietnamese) => "Báo cáo tổng hợp",
            (ReportKind::Summary, Language::English) => "Summary report",
        }
    }

    /// Noun used in the load failure message
    fn subject(&self, language: Language) -> &'static str {
        match (self, language) {
            (ReportKind::Dashboard | ReportKind::Summary, Language::Vietnamese) => {
                "dữ liệu tổng quan"
            }
            (ReportKind::Dashboard | ReportKind::Summary, Language::English) => "dashboard data",
            (ReportKind::Inventory, Language::Vietnamese) => "báo cáo tồn kho",
            (ReportKind::Inventory, Language::English) => "the inventory report",
            (ReportKind::Revenue, Language::Vietnamese) => "báo cáo doanh thu",
            (ReportKind::Revenue, Language::English) => "the revenue report",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Stats(DashboardStats),
    Inventory(InventoryReport),
    Revenue(RevenueReport),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReportState {
    #[default]
    Loading,
    Ready(ReportData),
    Error(String),
}

pub struct ReportView {
    api: ApiClient,
    language: Language,
    kind: ReportKind,
    state: ReportState,
}

impl ReportView {
    pub fn new(api: ApiClient, language: Language, kind: ReportKind) -> Self {
        Self {
            api,
            language,
            kind,
            state: ReportState::Loading,
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub async fn mount(&mut self) {
        self.state = ReportState::Loading;
        self.state = match self.load().await {
            Ok(data) => ReportState::Ready(data),
            Err(err) => {
                tracing::error!(report = ?self.kind, code = err.code(), error = %err, "failed to load report");
                ReportState::Error(err.user_message(
                    Operation::Load,
                    self.kind.subject(self.language),
                    self.language,
                ))
            }
        };
    }

    async fn load(&self) -> ConsoleResult<ReportData> {
        let data = match self.kind {
            ReportKind::Dashboard | ReportKind::Summary => {
                ReportData::Stats(self.api.dashboard_stats().await?)
            }
            ReportKind::Inventory => ReportData::Inventory(self.api.inventory_report().await?),
            ReportKind::Revenue => ReportData::Revenue(self.api.revenue_report().await?),
        };
        Ok(data)
    }
}
