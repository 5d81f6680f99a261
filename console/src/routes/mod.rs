//! Route definitions for the Warehouse Console

use shared::Language;

use crate::views::{CrudView, CustomerView, ReportKind, ReportView, TransactionView, View, ViewContext};

/// Screens reachable with `go <path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Products,
    Employees,
    Transactions,
    Suppliers,
    Customers,
    InventoryReport,
    RevenueReport,
    SummaryReport,
    NotFound(String),
}

impl Route {
    /// Navigation menu order
    pub const MENU: [Route; 9] = [
        Route::Dashboard,
        Route::Products,
        Route::Employees,
        Route::Transactions,
        Route::Suppliers,
        Route::Customers,
        Route::InventoryReport,
        Route::RevenueReport,
        Route::SummaryReport,
    ];

    /// Resolve a path; trailing slashes are ignored
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match normalized {
            "/" => Route::Dashboard,
            "/products" => Route::Products,
            "/employees" => Route::Employees,
            "/transactions" => Route::Transactions,
            "/suppliers" => Route::Suppliers,
            "/customers" => Route::Customers,
            "/reports/inventory" => Route::InventoryReport,
            "/reports/revenue" => Route::RevenueReport,
            "/reports/summary" => Route::SummaryReport,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Products => "/products",
            Route::Employees => "/employees",
            Route::Transactions => "/transactions",
            Route::Suppliers => "/suppliers",
            Route::Customers => "/customers",
            Route::InventoryReport => "/reports/inventory",
            Route::RevenueReport => "/reports/revenue",
            Route::SummaryReport => "/reports/summary",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self, language: Language) -> &'static str {
        match (self, language) {
            (Route::Dashboard, _) => ReportKind::Dashboard.title(language),
            (Route::Products, Language::Vietnamese) => "Quản lý sản phẩm",
            (Route::Products, Language::English) => "Products",
            (Route::Employees, Language::Vietnamese) => "Quản lý nhân viên",
            (Route::Employees, Language::English) => "Employees",
            (Route::Transactions, Language::Vietnamese) => "Nhập / xuất kho",
            (Route::Transactions, Language::English) => "Transactions",
            (Route::Suppliers, Language::Vietnamese) => "Quản lý nhà cung cấp",
            (Route::Suppliers, Language::English) => "Suppliers",
            (Route::Customers, Language::Vietnamese) => "Quản lý khách hàng",
            (Route::Customers, Language::English) => "Customers",
            (Route::InventoryReport, _) => ReportKind::Inventory.title(language),
            (Route::RevenueReport, _) => ReportKind::Revenue.title(language),
            (Route::SummaryReport, _) => ReportKind::Summary.title(language),
            (Route::NotFound(_), Language::Vietnamese) => "Không tìm thấy trang",
            (Route::NotFound(_), Language::English) => "Page not found",
        }
    }

    /// Build the (unmounted) view for this route
    pub fn view(&self, ctx: &ViewContext) -> View {
        let report = |kind| View::Report(ReportView::new(ctx.api.clone(), ctx.language, kind));
        match self {
            Route::Dashboard => report(ReportKind::Dashboard),
            Route::Products => View::Products(CrudView::new(ctx)),
            Route::Employees => View::Employees(CrudView::new(ctx)),
            Route::Transactions => View::Transactions(TransactionView::new(ctx)),
            Route::Suppliers => View::Suppliers(CrudView::new(ctx)),
            Route::Customers => View::Customers(CustomerView::new(ctx)),
            Route::InventoryReport => report(ReportKind::Inventory),
            Route::RevenueReport => report(ReportKind::Revenue),
            Route::SummaryReport => report(ReportKind::Summary),
            Route::NotFound(path) => View::NotFound {
                path: path.clone(),
                language: ctx.language,
            },
        }
    }
}
