use crate::bridge;
use leptos::*;
use relief_core::chart;
use relief_core::ledger::{self, ChartSlice, MonetaryRecord, ALLOCATION_CATEGORIES, DONATION_CHANNELS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FundsRole {
    Public,
    Admin,
}

#[component]
pub fn FundsPage() -> impl IntoView {
    // Page-local gate, separate from the application login.
    let role = create_rw_signal(None::<FundsRole>);

    view! {
      <div class="page">
        {move || match role.get() {
            None => view! { <RoleGate role=role/> }.into_view(),
            Some(FundsRole::Public) => view! { <FundsDashboard role=role admin=false/> }.into_view(),
            Some(FundsRole::Admin) => view! { <FundsDashboard role=role admin=true/> }.into_view(),
        }}
      </div>
    }
}

#[component]
fn RoleGate(role: RwSignal<Option<FundsRole>>) -> impl IntoView {
    view! {
      <div class="login-container">
        <div class="card login-card">
          <h1>"Relief Funds"</h1>
          <p>"Select your access level to continue"</p>
          <div class="stack">
            <button class="role-public" on:click=move |_| role.set(Some(FundsRole::Public))>
              "Login as Public"
            </button>
            <button class="role-admin" on:click=move |_| role.set(Some(FundsRole::Admin))>
              "Login as Admin"
            </button>
          </div>
        </div>
      </div>
    }
}

#[component]
fn FundsDashboard(role: RwSignal<Option<FundsRole>>, admin: bool) -> impl IntoView {
    let donations = relief_registry::sample_donations();
    let allocations = relief_registry::sample_allocations();

    let total_collected = ledger::sum_amounts(&donations);
    let total_allocated = ledger::sum_amounts(&allocations);
    let remaining = ledger::remaining(total_collected, total_allocated);
    let breakdown = ledger::to_chart_breakdown(&allocations, &ALLOCATION_CATEGORIES);

    let title = if admin {
        "Relief Fund Admin Dashboard"
    } else {
        "Relief Fund Public Dashboard"
    };

    view! {
      <header class="funds-header">
        <h1>{title}</h1>
        <button class="logout-button" on:click=move |_| role.set(None)>"Logout"</button>
      </header>

      <div class="grid grid-2">
        <div class="card summary-card">
          <h2>"💰 Fund Summary"</h2>
          <div class="summary-stats">
            <div class="stat">
              <span class="stat-label">"Total Collected"</span>
              <span class="stat-value">{format!("₹{}", ledger::group_thousands(total_collected))}</span>
            </div>
            <div class="stat">
              <span class="stat-label">"Total Allocated"</span>
              <span class="stat-value">{format!("₹{}", ledger::group_thousands(total_allocated))}</span>
            </div>
            <div class="stat">
              <span class="stat-label">"Remaining"</span>
              <span class="stat-value">{format_signed(remaining)}</span>
            </div>
          </div>
        </div>

        <AllocationChart breakdown=breakdown/>

        <LedgerTable
          title="💝 Recent Donations"
          label_column="Donor Name"
          category_column="Type"
          records=donations
        />
        <LedgerTable
          title="🎯 Recent Allocations"
          label_column="Region"
          category_column="Purpose"
          records=allocations
        />

        <Show when=move || admin fallback=|| ()>
          <DonationForm/>
          <AllocationForm/>
        </Show>
      </div>
    }
}

fn format_signed(amount: i64) -> String {
    if amount < 0 {
        format!("-₹{}", ledger::group_thousands(amount.unsigned_abs()))
    } else {
        format!("₹{}", ledger::group_thousands(amount as u64))
    }
}

#[component]
fn AllocationChart(breakdown: Vec<ChartSlice>) -> impl IntoView {
    let total: u64 = breakdown.iter().map(|s| s.value).sum();
    let spans = chart::slice_spans(&breakdown);

    let paths: Vec<_> = breakdown
        .iter()
        .zip(&spans)
        .filter(|(_, (start, end))| end > start)
        .map(|(slice, (start, end))| {
            view! {
              <path
                d=chart::slice_path(100.0, 100.0, 80.0, *start, *end)
                fill=slice.color_token.clone()
              ></path>
            }
        })
        .collect();

    let legend: Vec<_> = breakdown
        .iter()
        .map(|slice| {
            view! {
              <li class="legend-item">
                <span class="legend-chip" style=format!("background-color: {}", slice.color_token)></span>
                <span>{chart::share_label(&slice.category, slice.value, total)}</span>
              </li>
            }
        })
        .collect();

    view! {
      <div class="card chart-card">
        <h2>"📊 Fund Allocation by Category"</h2>
        <svg class="allocation-pie" viewBox="0 0 200 200">{paths}</svg>
        <ul class="legend">{legend}</ul>
      </div>
    }
}

#[component]
fn LedgerTable(
    title: &'static str,
    label_column: &'static str,
    category_column: &'static str,
    records: Vec<MonetaryRecord>,
) -> impl IntoView {
    view! {
      <div class="card table-card">
        <h2>{title}</h2>
        <table class="data-table">
          <thead>
            <tr>
              <th>{label_column}</th>
              <th>{category_column}</th>
              <th>"Amount"</th>
              <th>"Date"</th>
            </tr>
          </thead>
          <tbody>
            <For
              each=move || records.clone()
              key=|r: &MonetaryRecord| r.id
              children=move |record| view! {
                <tr>
                  <td>{record.label.clone()}</td>
                  <td>{record.category.clone()}</td>
                  <td>{format!("₹{}", ledger::group_thousands(record.amount))}</td>
                  <td>{record.date.clone()}</td>
                </tr>
              }
            />
          </tbody>
        </table>
      </div>
    }
}

#[component]
fn DonationForm() -> impl IntoView {
    let donor = create_rw_signal(String::new());
    let amount = create_rw_signal(String::new());
    let channel = create_rw_signal(DONATION_CHANNELS[0].to_string());
    let date = create_rw_signal(String::new());

    // Prototype behavior: acknowledge and reset without touching the ledger.
    let submit = move |_| {
        bridge::alert("Donation added successfully! (Prototype - no actual data change)");
        donor.set(String::new());
        amount.set(String::new());
        channel.set(DONATION_CHANNELS[0].to_string());
        date.set(String::new());
    };

    view! {
      <div class="card form-card">
        <h2>"➕ Add New Donation"</h2>
        <div class="form-row">
          <div class="form-group">
            <label>"Donor Name:"</label>
            <input
              type="text"
              placeholder="Enter donor name"
              prop:value=move || donor.get()
              on:input=move |ev| donor.set(event_target_value(&ev))
            />
          </div>
          <div class="form-group">
            <label>"Amount:"</label>
            <input
              type="number"
              placeholder="Enter amount"
              prop:value=move || amount.get()
              on:input=move |ev| amount.set(event_target_value(&ev))
            />
          </div>
        </div>
        <div class="form-row">
          <div class="form-group">
            <label>"Type:"</label>
            <select
              prop:value=move || channel.get()
              on:change=move |ev| channel.set(event_target_value(&ev))
            >
              {DONATION_CHANNELS
                  .iter()
                  .copied()
                  .map(|name| view! { <option value=name>{name}</option> })
                  .collect::<Vec<_>>()}
            </select>
          </div>
          <div class="form-group">
            <label>"Date:"</label>
            <input
              type="date"
              prop:value=move || date.get()
              on:input=move |ev| date.set(event_target_value(&ev))
            />
          </div>
        </div>
        <button class="submit-button" on:click=submit>"Add Donation"</button>
      </div>
    }
}

#[component]
fn AllocationForm() -> impl IntoView {
    let region = create_rw_signal(String::new());
    let purpose = create_rw_signal(ALLOCATION_CATEGORIES[0].name.to_string());
    let amount = create_rw_signal(String::new());
    let date = create_rw_signal(String::new());

    let submit = move |_| {
        bridge::alert("Allocation added successfully! (Prototype - no actual data change)");
        region.set(String::new());
        purpose.set(ALLOCATION_CATEGORIES[0].name.to_string());
        amount.set(String::new());
        date.set(String::new());
    };

    view! {
      <div class="card form-card">
        <h2>"🎯 Add New Allocation"</h2>
        <div class="form-row">
          <div class="form-group">
            <label>"Region:"</label>
            <input
              type="text"
              placeholder="Enter region name"
              prop:value=move || region.get()
              on:input=move |ev| region.set(event_target_value(&ev))
            />
          </div>
          <div class="form-group">
            <label>"Purpose:"</label>
            <select
              prop:value=move || purpose.get()
              on:change=move |ev| purpose.set(event_target_value(&ev))
            >
              {ALLOCATION_CATEGORIES
                  .iter()
                  .map(|spec| view! { <option value=spec.name>{spec.name}</option> })
                  .collect::<Vec<_>>()}
            </select>
          </div>
        </div>
        <div class="form-row">
          <div class="form-group">
            <label>"Amount:"</label>
            <input
              type="number"
              placeholder="Enter amount"
              prop:value=move || amount.get()
              on:input=move |ev| amount.set(event_target_value(&ev))
            />
          </div>
          <div class="form-group">
            <label>"Date:"</label>
            <input
              type="date"
              prop:value=move || date.get()
              on:input=move |ev| date.set(event_target_value(&ev))
            />
          </div>
        </div>
        <button class="submit-button" on:click=submit>"Add Allocation"</button>
      </div>
    }
}
