use crate::{
    cache::{Outcome, SingleFlightCache},
    config::MetadataConfig,
    convert::{BuiltinConverters, ConverterRegistry},
    descriptor::{EntityType, TypeDescriptor},
    error::MetadataError,
    model::{ColumnMap, ColumnOrId, Id},
    obs::{MetadataEvent, MetadataMetrics, MetricsReport},
    schema,
};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

static GLOBAL: OnceLock<Metadata> = OnceLock::new();

///
/// Metadata
///
/// Table metadata with per-entity caching of the primary key and the column
/// map. Entries are computed on first request, at most once per entity even
/// under concurrent callers, and kept for the life of the instance.
///

pub struct Metadata {
    config: MetadataConfig,
    converters: Arc<dyn ConverterRegistry>,
    ids: SingleFlightCache<Id>,
    columns: SingleFlightCache<ColumnMap>,
    metrics: MetadataMetrics,
}

impl Metadata {
    #[must_use]
    pub fn new(config: MetadataConfig, converters: Arc<dyn ConverterRegistry>) -> Self {
        Self {
            config,
            converters,
            ids: SingleFlightCache::new(),
            columns: SingleFlightCache::new(),
            metrics: MetadataMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_config(config: MetadataConfig) -> Self {
        Self::new(config, Arc::new(BuiltinConverters::new()))
    }

    /// Process-wide instance with default config and built-in converters.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::default)
    }

    #[must_use]
    pub const fn config(&self) -> &MetadataConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    #[must_use]
    pub fn table_name(&self, entity: &TypeDescriptor) -> String {
        schema::table_name(entity)
    }

    #[must_use]
    pub fn after_create_hook(&self, entity: &TypeDescriptor) -> Option<&'static str> {
        schema::after_create_hook(entity)
    }

    pub fn id(&self, entity: &'static TypeDescriptor) -> Result<Arc<Id>, MetadataError> {
        let (id, outcome) = self
            .ids
            .get_or_try_init(entity.path, || self.compute_id(entity))?;

        if outcome == Outcome::Hit {
            self.metrics.record(MetadataEvent::IdHit);
        }

        Ok(id)
    }

    /// Column map of `entity`, excluding its primary key.
    pub fn column_map(
        &self,
        entity: &'static TypeDescriptor,
    ) -> Result<Arc<ColumnMap>, MetadataError> {
        let (columns, outcome) = self
            .columns
            .get_or_try_init(entity.path, || self.compute_columns(entity))?;

        if outcome == Outcome::Hit {
            self.metrics.record(MetadataEvent::ColumnsHit);
        }

        Ok(columns)
    }

    /// The primary key when `column_name` names it, otherwise the matching
    /// column, if any.
    pub fn column_or_id(
        &self,
        entity: &'static TypeDescriptor,
        column_name: &str,
    ) -> Result<Option<ColumnOrId>, MetadataError> {
        let id = self.id(entity)?;
        if id.name() == column_name {
            return Ok(Some(ColumnOrId::Id(id)));
        }

        let columns = self.column_map(entity)?;

        Ok(columns.get(column_name).cloned().map(ColumnOrId::Column))
    }

    #[must_use]
    pub fn table_name_of<E: EntityType>(&self) -> String {
        self.table_name(E::DESCRIPTOR)
    }

    pub fn id_of<E: EntityType>(&self) -> Result<Arc<Id>, MetadataError> {
        self.id(E::DESCRIPTOR)
    }

    pub fn column_map_of<E: EntityType>(&self) -> Result<Arc<ColumnMap>, MetadataError> {
        self.column_map(E::DESCRIPTOR)
    }

    fn compute_id(&self, entity: &'static TypeDescriptor) -> Result<Id, MetadataError> {
        self.metrics.record(MetadataEvent::IdMiss);

        let id = schema::resolve_id(entity, &self.config, self.converters.as_ref())
            .inspect_err(|err| self.record_failure(err))?;

        self.metrics.record(MetadataEvent::IdResolved);
        tracing::debug!(
            entity = entity.path,
            field = id.field().name,
            declaring = id.declaring().path,
            "primary key cached"
        );

        Ok(id)
    }

    // The key is resolved first so collection can exclude it.
    fn compute_columns(
        &self,
        entity: &'static TypeDescriptor,
    ) -> Result<ColumnMap, MetadataError> {
        self.metrics.record(MetadataEvent::ColumnsMiss);

        let id = self.id(entity)?;
        let columns = schema::collect_columns(
            entity,
            id.field().name,
            &self.config,
            self.converters.as_ref(),
        )
        .inspect_err(|err| self.record_failure(err))?;

        self.metrics.record(MetadataEvent::ColumnsResolved);
        tracing::debug!(
            entity = entity.path,
            columns = columns.len(),
            "column map cached"
        );

        Ok(columns)
    }

    fn record_failure(&self, err: &MetadataError) {
        self.metrics.record(MetadataEvent::Failed);
        tracing::warn!(entity = err.entity(), error = %err, "metadata resolution failed");
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::with_config(MetadataConfig::default())
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("config", &self.config)
            .field("ids", &self.ids.len())
            .field("columns", &self.columns.len())
            .finish_non_exhaustive()
    }
}

#[must_use]
pub fn table_name<E: EntityType>() -> String {
    Metadata::global().table_name_of::<E>()
}

#[must_use]
pub fn after_create_hook<E: EntityType>() -> Option<&'static str> {
    Metadata::global().after_create_hook(E::DESCRIPTOR)
}

pub fn id<E: EntityType>() -> Result<Arc<Id>, MetadataError> {
    Metadata::global().id_of::<E>()
}

pub fn column_map<E: EntityType>() -> Result<Arc<ColumnMap>, MetadataError> {
    Metadata::global().column_map_of::<E>()
}

pub fn column_or_id<E: EntityType>(
    column_name: &str,
) -> Result<Option<ColumnOrId>, MetadataError> {
    Metadata::global().column_or_id(E::DESCRIPTOR, column_name)
}
