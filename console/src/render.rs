//! Plain-text rendering of views
//!
//! Tables are padded by character count so Vietnamese text lines up.

use std::fmt::Write;

use shared::{
    format_count, format_vnd, Customer, CustomerOrder, DashboardStats, Employee,
    EntityForm, FormMode, InventoryReportRow, Language, Product, RevenueReportRow, Supplier,
    Transaction, TransactionForm,
};

use crate::api::Resource;
use crate::routes::Route;
use crate::views::{
    CrudView, CustomerView, OrdersPanel, ReportData, ReportKind, ReportState, ReportView,
    TransactionView, View, ViewState,
};

/// A record that renders as one table row
pub trait Tabular {
    fn headers(language: Language) -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

fn vi_en(language: Language, vi: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Vietnamese => vi,
        Language::English => en,
    }
}

impl Tabular for Product {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            "ID",
            vi_en(language, "Tên", "Name"),
            vi_en(language, "Danh mục", "Category"),
            vi_en(language, "Xuất xứ", "Origin"),
            vi_en(language, "Tồn kho", "Stock"),
            vi_en(language, "Giá nhập", "Cost"),
            vi_en(language, "Giá bán", "Price"),
            vi_en(language, "Hạn SD", "Expires"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone().unwrap_or_default(),
            self.origin.clone(),
            format_count(self.stock),
            format_vnd(self.purchase_cost),
            format_vnd(self.sale_price),
            self.expiry_date.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

impl Tabular for Employee {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            "ID",
            vi_en(language, "Họ tên", "Name"),
            vi_en(language, "Giới tính", "Gender"),
            vi_en(language, "Điện thoại", "Phone"),
            vi_en(language, "Chức vụ", "Position"),
            vi_en(language, "Doanh thu", "Revenue"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.gender.label(Language::Vietnamese).to_string(),
            self.phone.clone(),
            self.position.clone(),
            format_vnd(self.revenue_contribution),
        ]
    }
}

impl Tabular for Supplier {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            "ID",
            vi_en(language, "Tên", "Name"),
            vi_en(language, "Người liên hệ", "Contact"),
            vi_en(language, "Điện thoại", "Phone"),
            "Email",
            vi_en(language, "Địa chỉ", "Address"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.contact_person.clone(),
            self.phone.clone(),
            self.email.clone().unwrap_or_default(),
            self.address.clone(),
        ]
    }
}

impl Tabular for Customer {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            "ID",
            vi_en(language, "Tên", "Name"),
            vi_en(language, "Điện thoại", "Phone"),
            vi_en(language, "Địa chỉ", "Address"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.address.clone(),
        ]
    }
}

impl Tabular for Transaction {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            "ID",
            vi_en(language, "Loại", "Type"),
            vi_en(language, "Sản phẩm", "Product"),
            vi_en(language, "Số lượng", "Qty"),
            vi_en(language, "Đơn giá", "Price"),
            vi_en(language, "Thành tiền", "Total"),
            vi_en(language, "Ngày", "Date"),
            vi_en(language, "Nhân viên", "Employee"),
            vi_en(language, "Đối tác", "Counterparty"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.product_id.clone(),
            format_count(self.quantity),
            format_vnd(self.price),
            format_vnd(self.total_amount()),
            self.date.to_string(),
            self.employee_id.clone(),
            self.counterparty().unwrap_or("-").to_string(),
        ]
    }
}

impl Tabular for CustomerOrder {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            vi_en(language, "Mã đơn", "Order"),
            vi_en(language, "Sản phẩm", "Product"),
            vi_en(language, "Số lượng", "Qty"),
            vi_en(language, "Tổng tiền", "Total"),
            vi_en(language, "Ngày", "Date"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.product_id.clone(),
            format_count(self.quantity),
            format_vnd(self.total_amount),
            self.date.to_string(),
        ]
    }
}

impl Tabular for InventoryReportRow {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            vi_en(language, "Kho", "Warehouse"),
            vi_en(language, "Mã SP", "Product"),
            vi_en(language, "Tên sản phẩm", "Name"),
            vi_en(language, "Tồn hiện tại", "In stock"),
            vi_en(language, "Tổng nhập", "Imported"),
            vi_en(language, "Tổng xuất", "Exported"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.warehouse_id.clone(),
            self.product_id.clone(),
            self.product_name.clone(),
            format_count(self.current_stock),
            format_count(self.total_imports),
            format_count(self.total_exports),
        ]
    }
}

impl Tabular for RevenueReportRow {
    fn headers(language: Language) -> Vec<&'static str> {
        vec![
            vi_en(language, "Tháng", "Month"),
            vi_en(language, "Doanh thu", "Revenue"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.month.clone(), format_vnd(self.total_revenue)]
    }
}

// ============================================================================
// Building blocks
// ============================================================================

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(to.saturating_sub(width(text))));
    padded
}

/// Render rows under a header line
pub fn table<T: Tabular>(rows: &[T], language: Language) -> String {
    let headers = T::headers(language);
    let body: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(width(cell));
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers.iter().map(|h| h.to_string()).collect()));
    let _ = writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    if body.is_empty() {
        let _ = writeln!(out, "{}", vi_en(language, "(không có dữ liệu)", "(no records)"));
    }
    for row in body {
        let _ = writeln!(out, "{}", line(row));
    }
    out
}

/// Error panel with a localized message
pub fn error_panel(message: &str, language: Language) -> String {
    format!("{}: {}\n", vi_en(language, "Lỗi", "Error"), message)
}

fn card(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<28} {}", format!("{}:", label), value);
}

fn loading(language: Language) -> String {
    format!("{}\n", vi_en(language, "Đang tải...", "Loading..."))
}

// ============================================================================
// Views
// ============================================================================

pub fn render_view(route: &Route, view: &View) -> String {
    let language = view.language();
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", route.title(language));

    let body = match view {
        View::Products(v) => crud_view(v),
        View::Employees(v) => crud_view(v),
        View::Suppliers(v) => crud_view(v),
        View::Customers(v) => customer_view(v),
        View::Transactions(v) => transaction_view(v),
        View::Report(v) => report_view(v),
        View::NotFound { path, .. } => format!(
            "{}: {}\n",
            vi_en(language, "Không tìm thấy trang", "No page at"),
            path
        ),
    };
    out.push_str(&body);
    out
}

fn crud_view<R: Resource + Tabular>(view: &CrudView<R>) -> String {
    let language = view.language();
    let mut out = String::new();
    if !view.search().is_empty() {
        let _ = writeln!(out, "{}: {}", vi_en(language, "Tìm kiếm", "Search"), view.search());
    }

    match view.state() {
        ViewState::Loading => out.push_str(&loading(language)),
        ViewState::Ready { rows } => out.push_str(&table(rows, language)),
        ViewState::Error { message, .. } => out.push_str(&error_panel(message, language)),
        ViewState::Editing {
            rows,
            mode,
            form,
            error,
        } => {
            out.push_str(&table(rows, language));
            out.push_str(&form_panel(
                mode,
                form,
                <R::Form as EntityForm>::FIELDS,
                error.as_deref(),
                language,
            ));
        }
    }
    out
}

fn form_panel<F: EntityForm>(
    mode: &FormMode,
    form: &F,
    fields: &[&str],
    error: Option<&str>,
    language: Language,
) -> String {
    let mut out = String::new();
    let heading = match mode {
        FormMode::Create => vi_en(language, "Thêm mới", "New record").to_string(),
        FormMode::Edit(id) => format!("{} {}", vi_en(language, "Sửa", "Edit"), id),
    };
    let _ = writeln!(out, "\n-- {} --", heading);
    for field in fields {
        let value = form.field_value(field).unwrap_or_default();
        let _ = writeln!(out, "  {:<16} {}", field, value);
    }
    if let Some(message) = error {
        out.push_str(&error_panel(message, language));
    }
    out
}

fn customer_view(view: &CustomerView) -> String {
    let language = view.crud().language();
    let mut out = crud_view(view.crud());

    match view.orders() {
        OrdersPanel::Idle => {}
        OrdersPanel::Loading { customer_id } => {
            let _ = writeln!(out, "\n-- {} {} --", vi_en(language, "Đơn hàng của", "Orders for"), customer_id);
            out.push_str(&loading(language));
        }
        OrdersPanel::Ready {
            customer_id,
            orders,
        } => {
            let _ = writeln!(out, "\n-- {} {} --", vi_en(language, "Đơn hàng của", "Orders for"), customer_id);
            out.push_str(&table(orders, language));
        }
        OrdersPanel::Error {
            customer_id,
            message,
        } => {
            let _ = writeln!(out, "\n-- {} {} --", vi_en(language, "Đơn hàng của", "Orders for"), customer_id);
            out.push_str(&error_panel(message, language));
        }
    }
    out
}

fn transaction_view(view: &TransactionView) -> String {
    let crud = view.crud();
    let language = crud.language();
    let mut out = String::new();

    if let Some(message) = view.lookup_error() {
        out.push_str(&error_panel(message, language));
    }

    match crud.state() {
        ViewState::Editing {
            rows,
            mode,
            form,
            error,
        } => {
            out.push_str(&table(rows, language));
            out.push_str(&form_panel(
                mode,
                form,
                &form.visible_fields(),
                error.as_deref(),
                language,
            ));
            out.push_str(&reference_choices(view, form, language));
        }
        _ => out.push_str(&crud_view(crud)),
    }
    out
}

/// Selectable records for the reference fields of the open transaction form
fn reference_choices(view: &TransactionView, form: &TransactionForm, language: Language) -> String {
    let mut out = String::new();
    for field in ["product_id", "employee_id", form.kind.counterparty_field()] {
        let options = view.options(field);
        if options.is_empty() {
            continue;
        }
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let _ = writeln!(
            out,
            "  {} {}: {}",
            vi_en(language, "chọn", "choose"),
            field,
            labels.join(", ")
        );
    }
    out
}

fn report_view(view: &ReportView) -> String {
    let language = view.language();
    match view.state() {
        ReportState::Loading => loading(language),
        ReportState::Error(message) => error_panel(message, language),
        ReportState::Ready(ReportData::Stats(stats)) => match view.kind() {
            ReportKind::Summary => summary_cards(stats, language),
            _ => dashboard_cards(stats, language),
        },
        ReportState::Ready(ReportData::Inventory(report)) => table(&report.0, language),
        ReportState::Ready(ReportData::Revenue(report)) => {
            let mut out = table(&report.0, language);
            let _ = writeln!(
                out,
                "{}: {}",
                vi_en(language, "Tổng cộng", "Total"),
                format_vnd(report.total())
            );
            out
        }
    }
}

fn dashboard_cards(stats: &DashboardStats, language: Language) -> String {
    let mut out = String::new();
    card(
        &mut out,
        vi_en(language, "Tổng sản phẩm", "Total products"),
        &format_count(stats.total_products),
    );
    card(
        &mut out,
        vi_en(language, "Đơn hàng mới", "New orders"),
        &format_count(stats.new_orders),
    );
    card(
        &mut out,
        vi_en(language, "Giá trị tồn kho", "Inventory value"),
        &format_vnd(stats.total_inventory_value),
    );
    out
}

fn summary_cards(stats: &DashboardStats, language: Language) -> String {
    let mut out = String::new();
    card(
        &mut out,
        vi_en(language, "Tổng sản phẩm", "Total products"),
        &format_count(stats.total_products),
    );
    card(
        &mut out,
        vi_en(language, "Doanh thu tháng trước", "Revenue last month"),
        &format_vnd(stats.total_revenue_last_month),
    );
    card(
        &mut out,
        vi_en(language, "Giao dịch chờ xử lý", "Pending transactions"),
        &format_count(stats.pending_transactions),
    );
    card(
        &mut out,
        vi_en(language, "Bán chạy nhất", "Top selling product"),
        &stats.top_selling_product,
    );
    out
}
