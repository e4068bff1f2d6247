//! Mock service implementations for deterministic query-layer tests.
//!
//! Each mock keeps its records behind a mutex, paginates like the remote
//! API (full `next` URLs carrying a `page` parameter), and counts calls so
//! tests can assert how many network round trips a read path cost.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use aqua_core::cursor::PageCursor;
use aqua_core::models::*;
use aqua_core::{Error, LocationApi, Result, SpecimenApi, StatisticsApi};

pub fn specimen(id: i64, scientific_name: &str) -> Specimen {
    let now = Utc::now();
    Specimen {
        id,
        scientific_name: scientific_name.to_string(),
        common_name: None,
        class_name: None,
        order: None,
        family: None,
        genus: None,
        species: None,
        description: None,
        locations: Vec::new(),
        collection_date: None,
        collector: None,
        image: None,
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn paginate<T: Clone>(records: &[T], page: u32, page_size: usize, endless: bool) -> Page<T> {
    let start = (page as usize - 1) * page_size;
    let end = (start + page_size).min(records.len());
    let results = if start < records.len() {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };
    let has_more = endless || end < records.len();
    Page {
        count: records.len() as i64,
        next: has_more.then(|| format!("http://mock.test/api/?page={}", page + 1)),
        previous: (page > 1).then(|| format!("http://mock.test/api/?page={}", page - 1)),
        results,
    }
}

/// Mock specimen backend.
pub struct MockSpecimenApi {
    records: Mutex<Vec<Specimen>>,
    page_size: usize,
    /// When set, `next` is always present: simulates a misbehaving server
    /// that never terminates pagination.
    endless: bool,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
}

impl MockSpecimenApi {
    pub fn new(records: Vec<Specimen>, page_size: usize) -> Self {
        Self {
            records: Mutex::new(records),
            page_size,
            endless: false,
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        }
    }

    pub fn endless(records: Vec<Specimen>, page_size: usize) -> Self {
        Self {
            endless: true,
            ..Self::new(records, page_size)
        }
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_call_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpecimenApi for MockSpecimenApi {
    async fn list(
        &self,
        _filter: &SpecimenFilter,
        cursor: Option<PageCursor>,
    ) -> Result<Page<Specimen>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().expect("mock poisoned").clone();
        let page = cursor.unwrap_or(PageCursor::FIRST).page();
        Ok(paginate(&records, page, self.page_size, self.endless))
    }

    async fn get(&self, id: i64) -> Result<Specimen> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .expect("mock poisoned")
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(Error::Api {
                status: 404,
                message: "Not found.".to_string(),
            })
    }

    async fn create(&self, input: &SpecimenInput) -> Result<Specimen> {
        input.validate()?;
        let mut records = self.records.lock().expect("mock poisoned");
        let id = records.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let created = specimen(id, &input.scientific_name);
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, input: &SpecimenInput) -> Result<Specimen> {
        input.validate()?;
        let mut records = self.records.lock().expect("mock poisoned");
        let existing = records.iter_mut().find(|s| s.id == id).ok_or(Error::Api {
            status: 404,
            message: "Not found.".to_string(),
        })?;
        existing.scientific_name = input.scientific_name.clone();
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.records
            .lock()
            .expect("mock poisoned")
            .retain(|s| s.id != id);
        Ok(())
    }
}

/// Mock location backend, serving already-normalized features.
pub struct MockLocationApi {
    features: Mutex<Vec<LocationFeature>>,
    page_size: usize,
    pub list_calls: AtomicUsize,
}

impl MockLocationApi {
    pub fn new(features: Vec<LocationFeature>, page_size: usize) -> Self {
        Self {
            features: Mutex::new(features),
            page_size,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn feature_from(id: i64, input: &LocationInput) -> LocationFeature {
        let now = Utc::now();
        LocationFeature {
            id,
            feature_type: "Feature".to_string(),
            geometry: Geometry::point(input.coordinates),
            properties: FeatureProperties {
                name: input.name.clone(),
                description: input.description.clone().unwrap_or_default(),
                created_at: now,
                updated_at: now,
            },
        }
    }
}

#[async_trait]
impl LocationApi for MockLocationApi {
    async fn list(&self, cursor: Option<PageCursor>) -> Result<Page<LocationFeature>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let features = self.features.lock().expect("mock poisoned").clone();
        let page = cursor.unwrap_or(PageCursor::FIRST).page();
        Ok(paginate(&features, page, self.page_size, false))
    }

    async fn get(&self, id: i64) -> Result<LocationFeature> {
        self.features
            .lock()
            .expect("mock poisoned")
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(Error::Api {
                status: 404,
                message: "Not found.".to_string(),
            })
    }

    async fn create(&self, input: &LocationInput) -> Result<LocationFeature> {
        input.validate()?;
        let mut features = self.features.lock().expect("mock poisoned");
        let id = features.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let created = Self::feature_from(id, input);
        features.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, input: &LocationInput) -> Result<LocationFeature> {
        input.validate()?;
        let mut features = self.features.lock().expect("mock poisoned");
        let existing = features.iter_mut().find(|f| f.id == id).ok_or(Error::Api {
            status: 404,
            message: "Not found.".to_string(),
        })?;
        *existing = Self::feature_from(id, input);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.features
            .lock()
            .expect("mock poisoned")
            .retain(|f| f.id != id);
        Ok(())
    }
}

/// Mock statistics backend.
pub struct MockStatisticsApi {
    stats: UserStatistics,
    pub fetch_calls: AtomicUsize,
}

impl MockStatisticsApi {
    pub fn new(stats: UserStatistics) -> Self {
        Self {
            stats,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatisticsApi for MockStatisticsApi {
    async fn fetch(&self) -> Result<UserStatistics> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stats.clone())
    }
}
