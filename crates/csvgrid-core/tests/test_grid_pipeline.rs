use csvgrid_core::{GridOptions, GridState, SortDirection, ViewCache, derive_view, ingest};

fn fixture_path() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{manifest_dir}/tests/data/cities.csv")
}

#[test]
fn test_load_csv_and_derive_view() -> anyhow::Result<()> {
    let table = ingest::read_csv(fixture_path())?;
    assert_eq!(table.headers(), ["city", "state", "pop"]);
    assert_eq!(table.len(), 10);

    let opts = GridOptions::builder().page_size(4).build();
    let state = GridState::new();
    let view = derive_view(&table, &state, &opts);

    assert_eq!(view.total_rows, 10);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.visible_rows.len(), 4);
    assert_eq!(view.visible_rows[0].text("city"), "NY");
    Ok(())
}

#[test]
fn test_filter_search_sort_paginate_end_to_end() -> anyhow::Result<()> {
    let table = ingest::read_csv(fixture_path())?;
    let opts = GridOptions::builder().page_size(2).build();

    let mut state = GridState::new();
    state.set_filter("state", vec!["CA".to_string(), "TX".to_string()]);
    state.set_sort(Some("pop".to_string()), SortDirection::Descending);

    // LA(4), Austin(2), SF(1) after filter + numeric descending sort
    let view = derive_view(&table, &state, &opts);
    assert_eq!(view.total_rows, 3);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.visible_rows[0].text("city"), "LA");
    assert_eq!(view.visible_rows[1].text("city"), "Austin");

    state.next_page(view.total_pages);
    let view = derive_view(&table, &state, &opts);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.visible_rows.len(), 1);
    assert_eq!(view.visible_rows[0].text("city"), "SF");

    // narrowing the search resets the page and re-derives from scratch
    state.set_search("la");
    let view = derive_view(&table, &state, &opts);
    assert_eq!(view.current_page, 0);
    assert_eq!(view.total_rows, 1);
    assert_eq!(view.visible_rows[0].text("city"), "LA");
    Ok(())
}

#[test]
fn test_option_lists_track_other_filters() -> anyhow::Result<()> {
    let table = ingest::read_csv(fixture_path())?;
    let opts = GridOptions::default();

    let mut state = GridState::new();
    state.set_filter("state", vec!["CA".to_string()]);

    let view = derive_view(&table, &state, &opts);
    // city options narrowed by the state filter
    assert_eq!(
        view.options("city"),
        Some(&["LA".to_string(), "SF".to_string()][..])
    );
    // state options unaffected by the state filter itself
    let states = view.options("state").expect("state options missing");
    assert_eq!(states.len(), 9);
    assert_eq!(states[0], "NY");
    Ok(())
}

#[test]
fn test_view_cache_over_interaction_sequence() -> anyhow::Result<()> {
    let table = ingest::read_csv(fixture_path())?;
    let opts = GridOptions::default();
    let mut cache = ViewCache::new();

    let mut state = GridState::new();
    let _ = cache.derive(&table, &state, &opts);
    let _ = cache.derive(&table, &state, &opts); // render with no state change
    state.toggle_sort("pop");
    let _ = cache.derive(&table, &state, &opts);

    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 2);
    Ok(())
}
