use maud::{html, Markup};

use crate::domain::pipeline::EnrichedProcess;
use crate::domain::severity::Severity;
use crate::domain::views::{
    format_thousands, CompanyBreakdown, CompanySelection, SeverityCount, StatusCount, StatusDays,
    ALL_COMPANIES,
};
use crate::templates::components::{bar_row, card, stat};
use crate::templates::desktop_layout;

pub struct DashboardVm<'a> {
    pub selection: CompanySelection,
    pub companies: Vec<String>,
    pub updated_at: String,
    pub breakdown: CompanyBreakdown,
    pub statuses: Vec<StatusCount>,
    pub severities: Vec<SeverityCount>,
    pub top_overdue: Vec<&'a EnrichedProcess>,
    pub table: Vec<&'a EnrichedProcess>,
    pub days_parked: Vec<StatusDays>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Processos Seletivos",
        html! {
            main class="container" {
                (toolbar(vm))
                (company_section(vm))
                (status_section(vm))
                (severity_section(vm))
                (top_overdue_section(vm))
                (tables_section(vm))
            }
        },
    )
}

fn toolbar(vm: &DashboardVm) -> Markup {
    html! {
        div class="toolbar" {
            form action="/" method="get" {
                label for="empresa" { "Empresa " }
                select name="empresa" id="empresa" onchange="this.form.submit()" {
                    option value=(ALL_COMPANIES) selected[vm.selection == CompanySelection::All] {
                        (ALL_COMPANIES)
                    }
                    @for company in &vm.companies {
                        option value=(company) selected[vm.selection.label() == company] {
                            (company)
                        }
                    }
                }
                noscript { button type="submit" { "Aplicar" } }
            }
            form action="/" method="get" {
                input type="hidden" name="refresh" value="1";
                button type="submit" { "Atualizar Dados" }
            }
            p class="updated-at" { "Data Atualização: " (vm.updated_at) }
        }
    }
}

fn company_section(vm: &DashboardVm) -> Markup {
    let max = vm
        .breakdown
        .rows
        .first()
        .map(|row| row.count as i64)
        .unwrap_or(0);

    card(
        "Quantidade de Processos por Empresa",
        html! {
            @if vm.breakdown.rows.is_empty() {
                p class="empty" { "Nenhum processo para exibir." }
            } @else {
                @for row in &vm.breakdown.rows {
                    (bar_row(&row.company, row.count as i64, max, "#1a2732"))
                }
            }
            div class="stat-row" {
                (stat(
                    "Total de empresas cadastradas",
                    &vm.breakdown.distinct_companies.to_string(),
                ))
                (stat(
                    "Total de processos cadastrados",
                    &vm.breakdown.total_records.to_string(),
                ))
            }
        },
    )
}

fn status_section(vm: &DashboardVm) -> Markup {
    let max = vm
        .statuses
        .first()
        .map(|row| row.count as i64)
        .unwrap_or(0);

    card(
        &format!("Status dos Processos - {}", vm.selection.label()),
        html! {
            @if vm.statuses.is_empty() {
                p class="empty" { "Nenhum processo para exibir." }
            } @else {
                @for row in &vm.statuses {
                    (bar_row(
                        &format!("{} - {} ({:.1}%)", row.status, row.count, row.percent),
                        row.count as i64,
                        max,
                        "#006ead",
                    ))
                }
            }
        },
    )
}

fn severity_section(vm: &DashboardVm) -> Markup {
    let max = vm
        .severities
        .first()
        .map(|row| row.count as i64)
        .unwrap_or(0);

    card(
        &format!("Níveis dos Processos - {}", vm.selection.label()),
        html! {
            @if vm.severities.is_empty() {
                p class="empty" { "Nenhum processo para exibir." }
            } @else {
                @for row in &vm.severities {
                    (bar_row(
                        row.severity.label(),
                        row.count as i64,
                        max,
                        severity_color(row.severity),
                    ))
                }
            }
        },
    )
}

fn top_overdue_section(vm: &DashboardVm) -> Markup {
    let max = vm
        .top_overdue
        .first()
        .and_then(|row| row.business_days)
        .unwrap_or(0);

    card(
        "Top 5 Empresas Mais Críticas",
        html! {
            @if vm.top_overdue.is_empty() {
                p class="empty" { "Nenhum processo para exibir." }
            } @else {
                @for row in &vm.top_overdue {
                    (bar_row(
                        row.company.as_deref().unwrap_or("—"),
                        row.business_days.unwrap_or(0),
                        max,
                        "#004c70",
                    ))
                }
            }
        },
    )
}

fn tables_section(vm: &DashboardVm) -> Markup {
    html! {
        div class="tables" {
            (card("Tabela de Processos", html! {
                @if vm.table.is_empty() {
                    p class="empty" { "Nenhum processo para exibir." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Empresa" }
                                th { "Cargo" }
                                th { "Status" }
                                th { "Nível" }
                                th class="num" { "Qtd dias (úteis)" }
                            }
                        }
                        tbody {
                            @for row in &vm.table {
                                tr {
                                    td { (row.company.as_deref().unwrap_or("")) }
                                    td { (row.role.as_deref().unwrap_or("")) }
                                    td { (row.status.as_deref().unwrap_or("")) }
                                    td { (row.severity.map(|s| s.label()).unwrap_or("")) }
                                    td class="num" {
                                        @match row.business_days {
                                            Some(days) => { (days) }
                                            None => { "—" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                a class="download" href=(export_href("/export/processes", &vm.selection)) {
                    "📥 Baixar Tabela_Processos"
                }
            }))
            (card("Dias Parados por Status", html! {
                @if vm.days_parked.is_empty() {
                    p class="empty" { "Nenhum processo para exibir." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Status" }
                                th class="num" { "Dias Parados" }
                            }
                        }
                        tbody {
                            @for row in &vm.days_parked {
                                tr {
                                    td { (row.status) }
                                    td class="num" { (format_thousands(row.days)) }
                                }
                            }
                        }
                    }
                }
                a class="download" href=(export_href("/export/days-parked", &vm.selection)) {
                    "📥 Baixar Dias_Parados_Por_Status"
                }
            }))
        }
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::OnTrack => "#2e7d32",
        Severity::Delayed => "#ef6c00",
        Severity::Critical => "#c62828",
    }
}

fn export_href(base: &str, selection: &CompanySelection) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("empresa", selection.label())
        .finish();
    format!("{base}?{query}")
}
