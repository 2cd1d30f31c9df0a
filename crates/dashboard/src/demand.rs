use meterops_core::RecordId;
use meterops_forecast::{demand_table_view, DemandRow, DemandTableView};
use meterops_infra::RecordGateway;
use meterops_records::DemandRecord;

use crate::render::{render_demand, RenderedTable};
use crate::state::TableState;
use crate::table::ResourceTable;

/// Demand table: the record table plus the two forecast rows.
///
/// The forecast is recomputed from the current rows after every action, so
/// it always matches the history on screen.
pub struct DemandTable<G> {
    table: ResourceTable<DemandRecord, G>,
    view: DemandTableView,
}

impl<G: RecordGateway<DemandRecord>> DemandTable<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            table: ResourceTable::new(gateway),
            view: demand_table_view(&[]),
        }
    }

    pub fn state(&self) -> &TableState<DemandRecord> {
        self.table.state()
    }

    pub fn view(&self) -> &DemandTableView {
        &self.view
    }

    pub async fn refresh(&mut self) -> bool {
        let ok = self.table.refresh().await;
        self.recompute();
        ok
    }

    pub async fn create(&mut self, record: DemandRecord) -> bool {
        let ok = self.table.create(record).await;
        self.recompute();
        ok
    }

    pub async fn update(&mut self, id: RecordId, record: DemandRecord) -> bool {
        let ok = self.table.update(id, record).await;
        self.recompute();
        ok
    }

    pub async fn delete(&mut self, id: RecordId) -> bool {
        let ok = self.table.delete(id).await;
        self.recompute();
        ok
    }

    pub async fn save_edit(&mut self) -> bool {
        let ok = self.table.save_edit().await;
        self.recompute();
        ok
    }

    /// Select a displayed row. Forecast rows are refused.
    pub fn select(&mut self, row: &DemandRow) -> bool {
        match row.action_target() {
            Some(id) => self.table.select(id),
            None => false,
        }
    }

    pub fn open_view(&mut self, row: &DemandRow) -> bool {
        match row.action_target() {
            Some(id) => self.table.open_view(id),
            None => false,
        }
    }

    pub fn open_edit(&mut self, row: &DemandRow) -> bool {
        match row.action_target() {
            Some(id) => self.table.open_edit(id),
            None => false,
        }
    }

    pub async fn delete_row(&mut self, row: &DemandRow) -> bool {
        match row.action_target() {
            Some(id) => self.delete(id).await,
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.table.close_modal();
    }

    pub fn render(&self) -> RenderedTable {
        render_demand(&self.view, self.table.state())
    }

    fn recompute(&mut self) {
        self.view = demand_table_view(self.table.state().rows());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use meterops_forecast::{NEXT_MONTH_LABEL, NEXT_YEAR_LABEL};
    use meterops_infra::{DocumentGateway, DocumentStore, InMemoryDocumentStore};

    use super::*;
    use crate::table::tests::{memory_gateway, Flaky};

    fn forecast(table: &DemandTable<impl RecordGateway<DemandRecord>>) -> (Vec<u64>, Vec<u64>) {
        let rows: Vec<&DemandRow> = table.view().forecast_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NEXT_MONTH_LABEL);
        assert_eq!(rows[1].date, NEXT_YEAR_LABEL);
        let counts = |r: &DemandRow| vec![r.faulty_program, r.meter_complaint, r.meter_leak];
        (counts(rows[0]), counts(rows[1]))
    }

    #[tokio::test]
    async fn empty_history_shows_zero_forecast() {
        let mut table = DemandTable::new(memory_gateway::<DemandRecord>());
        assert!(table.refresh().await);

        assert_eq!(table.view().rows.len(), 2);
        assert_eq!(forecast(&table), (vec![0, 0, 0], vec![0, 0, 0]));
    }

    #[tokio::test]
    async fn forecast_follows_every_mutation() {
        let mut table = DemandTable::new(memory_gateway::<DemandRecord>());

        table.create(DemandRecord::new("Jan", 2, 4, 0)).await;
        assert_eq!(forecast(&table), (vec![2, 4, 0], vec![24, 48, 0]));

        table.create(DemandRecord::new("Feb", 4, 0, 2)).await;
        assert_eq!(forecast(&table), (vec![3, 2, 1], vec![36, 24, 12]));

        let jan = table.view().rows[0].clone();
        table.update(jan.id.unwrap(), DemandRecord::new("Jan", 4, 0, 2)).await;
        assert_eq!(forecast(&table), (vec![4, 0, 2], vec![48, 0, 24]));

        assert!(table.delete_row(&jan).await);
        assert_eq!(forecast(&table), (vec![4, 0, 2], vec![48, 0, 24]));
        assert_eq!(table.view().historical_rows().count(), 1);
    }

    #[tokio::test]
    async fn forecast_rows_are_not_actionable() {
        let mut table = DemandTable::new(memory_gateway::<DemandRecord>());
        table.create(DemandRecord::new("Jan", 1, 1, 1)).await;

        let next_month = table.view().forecast_rows().next().unwrap().clone();
        assert!(!table.select(&next_month));
        assert!(!table.open_view(&next_month));
        assert!(!table.open_edit(&next_month));
        assert!(!table.delete_row(&next_month).await);
        assert_eq!(table.view().historical_rows().count(), 1);

        let jan = table.view().rows[0].clone();
        assert!(table.select(&jan));
        assert_eq!(table.state().selected(), jan.id);
    }

    fn assert_in_step(table: &DemandTable<impl RecordGateway<DemandRecord>>) {
        let expected = demand_table_view(table.state().rows());
        assert_eq!(table.view(), &expected);
    }

    #[tokio::test]
    async fn view_stays_in_step_with_rows_on_every_path() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let mut table = DemandTable::new(DocumentGateway::<DemandRecord>::new(store.clone()));

        table.create(DemandRecord::new("Jan", 2, 4, 0)).await;
        assert_in_step(&table);
        table.create(DemandRecord::new("Feb", 4, 0, 2)).await;
        assert_in_step(&table);
        assert_eq!(forecast(&table).0, vec![3, 2, 1]);

        let jan = table.view().rows[0].clone();
        assert!(table.open_edit(&jan));
        assert!(table.save_edit().await);
        assert_in_step(&table);

        table.update(jan.id.unwrap(), DemandRecord::new("Jan", 8, 0, 0)).await;
        assert_in_step(&table);

        // Written by another session; visible after the next refresh.
        let other = DocumentGateway::<DemandRecord>::new(store);
        other.create(DemandRecord::new("Mar", 3, 3, 3)).await.unwrap();
        assert!(table.refresh().await);
        assert_in_step(&table);
        assert_eq!(table.view().historical_rows().count(), 3);

        assert!(table.delete_row(&jan).await);
        assert_in_step(&table);
        table.close_modal();
        assert_in_step(&table);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_forecast() {
        let gateway = Flaky::new(memory_gateway::<DemandRecord>());
        let down = gateway.down.clone();
        let mut table = DemandTable::new(gateway);
        table.create(DemandRecord::new("Jan", 6, 3, 0)).await;
        let before = table.view().clone();

        down.store(true, Ordering::SeqCst);
        assert!(!table.refresh().await);

        assert_eq!(table.view(), &before);
        assert!(table.state().notification().unwrap().is_error());
    }
}
