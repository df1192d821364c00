use elementdb::{ElementStore, ElementTable, Field, Result, SortState};
use std::sync::Arc;
use std::time::Duration;

fn print_rows(label: &str, rows: &[elementdb::ElementRecord]) {
    println!("--- {label} ---");
    for row in rows {
        println!(
            "{:>3}  {:<10} {:<3} {}",
            row.position, row.name, row.symbol, row.weight
        );
    }
}

/// End-to-end walkthrough: seed the store, filter, sort, edit a cell, and
/// watch the recomputed rows flow back out.
#[tokio::main]
async fn main() -> Result<()> {
    let store = Arc::new(ElementStore::new());
    let table = ElementTable::new(Arc::clone(&store), Duration::from_millis(2000))?;

    store.initialize()?;
    print_rows("seed", &table.rows()?);

    // First filter change applies with no delay.
    table.set_filter("He")?;
    print_rows("filter: He", &table.rows()?);

    // Edit Helium's weight through the prompt-driven dialog model.
    let helium = table.rows()?[0].clone();
    table.edit_cell(&helium, Field::Weight, |_, _, _| Some("4.5".to_string()))?;
    print_rows("after edit", &table.rows()?);

    // Later filter changes settle only after the quiescence window.
    table.set_filter("o")?;
    tokio::time::sleep(Duration::from_millis(2100)).await;
    table.set_sort(Some(SortState::descending(Field::Name)))?;
    print_rows("filter: o, by name desc", &table.rows()?);

    Ok(())
}
