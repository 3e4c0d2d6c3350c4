//! Bulk operations coordinator (spec §4.8): batched store/update/delete with
//! progress tracking, cancellation, and import/export.

use std::io::{Read, Write};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use mcb_domain::entities::bulk::{BulkItemError, BulkOperationKind, BulkStatus, ConflictPolicy};
use mcb_domain::ports::{
    BulkProgressStore, BulkServiceInterface, ChunkRepository, RelationshipRepository,
};
use mcb_domain::{
    BulkOperationId, BulkOptions, BulkPayload, BulkProgress, Chunk, ChunkId, Compression, Error,
    ExportFilter, ImportExportFormat, Result,
};

pub struct BulkEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
    progress: Arc<dyn BulkProgressStore>,
    cancellations: DashMap<BulkOperationId, CancellationToken>,
}

impl BulkEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, relationships: Arc<dyn RelationshipRepository>, progress: Arc<dyn BulkProgressStore>) -> Self {
        Self { chunks, relationships, progress, cancellations: DashMap::new() }
    }

    /// Secure bulk-delete (spec §4.8): rejects, per item, any chunk whose
    /// stored repository disagrees with `repository`. Rejections are logged
    /// but never abort the batch.
    pub async fn secure_delete(&self, repository: &str, ids: &[ChunkId]) -> Result<BulkOperationId> {
        let operation_id = BulkOperationId::new();
        let started_at = Utc::now();
        let mut progress = BulkProgress::queued(operation_id, BulkOperationKind::Delete, ids.len(), 1, started_at);
        progress.status = BulkStatus::Running;

        for (index, id) in ids.iter().enumerate() {
            match self.chunks.get_chunk(id).await {
                Ok(Some(chunk)) if chunk.repository() == repository => {
                    self.relationships.delete_relationships_for_chunk(id).await?;
                    self.chunks.delete_chunk(id).await?;
                    progress.successful += 1;
                }
                Ok(Some(chunk)) => {
                    tracing::warn!(chunk_id = %id, expected = repository, actual = chunk.repository(), "secure bulk-delete rejected cross-repository chunk");
                    progress.skipped += 1;
                }
                Ok(None) => {
                    progress.errors.push(BulkItemError { item_index: index, item_id: Some(*id), error: "chunk not found".to_string(), timestamp: Utc::now() });
                    progress.failed += 1;
                }
                Err(err) => {
                    progress.errors.push(BulkItemError { item_index: index, item_id: Some(*id), error: err.to_string(), timestamp: Utc::now() });
                    progress.failed += 1;
                }
            }
            progress.processed += 1;
        }
        progress.status = BulkStatus::Completed;
        progress.elapsed_secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
        self.progress.put(progress).await?;
        Ok(operation_id)
    }

}

async fn run_store_or_update(
    chunks_repo: Arc<dyn ChunkRepository>,
    progress_store: Arc<dyn BulkProgressStore>,
    operation_id: BulkOperationId,
    kind: BulkOperationKind,
    items: Vec<Chunk>,
    options: BulkOptions,
    token: CancellationToken,
) {
    let started_at = Utc::now();
    let total_batches = items.len().div_ceil(options.batch_size.max(1));
    let mut progress = BulkProgress::queued(operation_id, kind, items.len(), total_batches, started_at);
    progress.status = BulkStatus::Running;

    let semaphore = Arc::new(Semaphore::new(options.max_concurrency.max(1)));
    let mut aborted = false;

    for (batch_index, batch) in items.chunks(options.batch_size.max(1)).enumerate() {
        if token.is_cancelled() {
            progress.status = BulkStatus::Cancelled;
            break;
        }
        progress.current_batch = batch_index + 1;

        let mut handles = Vec::new();
        for (offset, chunk) in batch.iter().cloned().enumerate() {
            let permit = Arc::clone(&semaphore);
            let chunks_repo = Arc::clone(&chunks_repo);
            let conflict_policy = options.conflict_policy;
            let dry_run = options.dry_run;
            let global_index = batch_index * options.batch_size.max(1) + offset;
            handles.push(tokio::spawn(async move {
                let _permit = permit.acquire_owned().await;
                let outcome = store_or_update_one(&chunks_repo, kind, chunk, conflict_policy, dry_run).await;
                (global_index, outcome)
            }));
        }

        for handle in handles {
            let (index, outcome) = match handle.await {
                Ok(v) => v,
                Err(join_err) => (0, Err(Error::internal(join_err.to_string()))),
            };
            match outcome {
                Ok(Some(())) => progress.successful += 1,
                Ok(None) => progress.skipped += 1,
                Err(err) => {
                    progress.failed += 1;
                    progress.errors.push(BulkItemError { item_index: index, item_id: None, error: err.to_string(), timestamp: Utc::now() });
                    if !options.continue_on_error {
                        aborted = true;
                    }
                }
            }
            progress.processed += 1;
        }
        progress.elapsed_secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
        let rate = progress.processed as f64 / progress.elapsed_secs.max(0.001);
        progress.estimated_remaining_secs = if rate > 0.0 { Some((progress.total - progress.processed) as f64 / rate) } else { None };
        let _ = progress_store.put(progress.clone()).await;

        if aborted {
            break;
        }
    }

    if progress.status != BulkStatus::Cancelled {
        progress.status = if aborted { BulkStatus::Failed } else { BulkStatus::Completed };
    }
    progress.elapsed_secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
    let _ = progress_store.put(progress).await;
}

async fn run_delete(
    chunks_repo: Arc<dyn ChunkRepository>,
    relationships_repo: Arc<dyn RelationshipRepository>,
    progress_store: Arc<dyn BulkProgressStore>,
    operation_id: BulkOperationId,
    ids: Vec<ChunkId>,
    options: BulkOptions,
    token: CancellationToken,
) {
    let started_at = Utc::now();
    let total_batches = ids.len().div_ceil(options.batch_size.max(1));
    let mut progress = BulkProgress::queued(operation_id, BulkOperationKind::Delete, ids.len(), total_batches, started_at);
    progress.status = BulkStatus::Running;

    for (batch_index, batch) in ids.chunks(options.batch_size.max(1)).enumerate() {
        if token.is_cancelled() {
            progress.status = BulkStatus::Cancelled;
            break;
        }
        progress.current_batch = batch_index + 1;
        for (offset, id) in batch.iter().enumerate() {
            let global_index = batch_index * options.batch_size.max(1) + offset;
            if options.dry_run {
                progress.successful += 1;
            } else {
                let outcome = relationships_repo.delete_relationships_for_chunk(id).await.and(chunks_repo.delete_chunk(id).await);
                match outcome {
                    Ok(()) => progress.successful += 1,
                    Err(err) => {
                        progress.failed += 1;
                        progress.errors.push(BulkItemError { item_index: global_index, item_id: Some(*id), error: err.to_string(), timestamp: Utc::now() });
                        if !options.continue_on_error {
                            progress.status = BulkStatus::Failed;
                            progress.processed += 1;
                            let _ = progress_store.put(progress).await;
                            return;
                        }
                    }
                }
            }
            progress.processed += 1;
        }
        progress.elapsed_secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
        let _ = progress_store.put(progress.clone()).await;
    }
    if progress.status == BulkStatus::Running {
        progress.status = BulkStatus::Completed;
    }
    let _ = progress_store.put(progress).await;
}

async fn store_or_update_one(
    chunks: &Arc<dyn ChunkRepository>,
    kind: BulkOperationKind,
    chunk: Chunk,
    conflict_policy: ConflictPolicy,
    dry_run: bool,
) -> Result<Option<()>> {
    if kind == BulkOperationKind::Update {
        return if dry_run { Ok(Some(())) } else { chunks.update_chunk(&chunk).await.map(Some) };
    }

    if let Some(existing) = chunks.find_by_hash(&chunk.content_hash).await? {
        match conflict_policy {
            ConflictPolicy::Skip => return Ok(None),
            ConflictPolicy::Fail => return Err(Error::conflict(format!("duplicate content hash for existing chunk {}", existing.id))),
            ConflictPolicy::Overwrite | ConflictPolicy::Merge => {
                if !dry_run {
                    chunks.delete_chunk(&existing.id).await?;
                }
            }
        }
    }
    if dry_run {
        return Ok(Some(()));
    }
    chunks.store_chunk(&chunk).await.map(Some)
}

#[async_trait]
impl BulkServiceInterface for BulkEngine {
    async fn submit(&self, payload: BulkPayload, options: BulkOptions) -> Result<BulkOperationId> {
        let operation_id = BulkOperationId::new();
        let token = CancellationToken::new();
        self.cancellations.insert(operation_id, token.clone());

        match payload {
            BulkPayload::Delete(ids) => {
                tokio::spawn(run_delete(
                    Arc::clone(&self.chunks),
                    Arc::clone(&self.relationships),
                    Arc::clone(&self.progress),
                    operation_id,
                    ids,
                    options,
                    token,
                ));
            }
            BulkPayload::Store(items) => {
                tokio::spawn(run_store_or_update(
                    Arc::clone(&self.chunks),
                    Arc::clone(&self.progress),
                    operation_id,
                    BulkOperationKind::Store,
                    items,
                    options,
                    token,
                ));
            }
            BulkPayload::Update(items) => {
                tokio::spawn(run_store_or_update(
                    Arc::clone(&self.chunks),
                    Arc::clone(&self.progress),
                    operation_id,
                    BulkOperationKind::Update,
                    items,
                    options,
                    token,
                ));
            }
        }
        Ok(operation_id)
    }

    async fn progress(&self, id: &BulkOperationId) -> Result<Option<BulkProgress>> {
        self.progress.get(id).await
    }

    async fn cancel(&self, id: &BulkOperationId) -> Result<()> {
        if let Some(token) = self.cancellations.get(id) {
            token.cancel();
            Ok(())
        } else {
            Err(Error::not_found(format!("bulk operation {id}")))
        }
    }

    async fn export(&self, filter: ExportFilter, format: ImportExportFormat, compression: Compression) -> Result<Vec<u8>> {
        let repository = filter.repository.clone().unwrap_or_else(|| "_global".to_string());
        let mut chunks = self.chunks.list_by_repository(&repository, usize::MAX).await?;
        chunks.retain(|c| matches_export_filter(c, &filter));

        let encoded = match format {
            ImportExportFormat::Json | ImportExportFormat::Auto => serde_json::to_vec(&chunks).map_err(|e| Error::generic(e.to_string()))?,
            ImportExportFormat::Markdown => encode_markdown(&chunks).into_bytes(),
            ImportExportFormat::Csv => encode_csv(&chunks)?,
            ImportExportFormat::Archive => encode_archive(&chunks)?,
        };
        compress(encoded, compression)
    }

    async fn import(&self, data: &[u8], format: ImportExportFormat, options: BulkOptions) -> Result<BulkOperationId> {
        let format = if format == ImportExportFormat::Auto { sniff_format(data) } else { format };
        let chunks = match format {
            ImportExportFormat::Json | ImportExportFormat::Auto => {
                serde_json::from_slice::<Vec<Chunk>>(data).map_err(|e| Error::invalid_argument(format!("invalid json export: {e}")))?
            }
            ImportExportFormat::Csv => decode_csv(data)?,
            ImportExportFormat::Archive => decode_archive(data)?,
            ImportExportFormat::Markdown => {
                return Err(Error::invalid_argument("markdown import is not round-trippable; re-export as json or csv"))
            }
        };
        self.submit(BulkPayload::Store(chunks), options).await
    }
}

fn matches_export_filter(chunk: &Chunk, filter: &ExportFilter) -> bool {
    if let Some(sessions) = &filter.session_ids {
        if !sessions.iter().any(|s| s.as_str() == chunk.session_id.as_str()) {
            return false;
        }
    }
    if let Some(types) = &filter.types {
        if !types.iter().any(|t| t.as_str() == chunk.r#type.as_str()) {
            return false;
        }
    }
    if let Some(tags) = &filter.tags {
        if !tags.iter().any(|t| chunk.metadata.tags.contains(t)) {
            return false;
        }
    }
    if let Some((start, end)) = filter.date_range {
        if chunk.timestamp < start || chunk.timestamp > end {
            return false;
        }
    }
    if let Some(pattern) = &filter.content_regex {
        if let Ok(re) = regex_lite_contains(pattern, &chunk.content) {
            if !re {
                return false;
            }
        }
    }
    true
}

/// Minimal substring-based stand-in for a content filter; a real regex
/// engine is out of scope for the reference export path.
fn regex_lite_contains(pattern: &str, haystack: &str) -> std::result::Result<bool, ()> {
    Ok(haystack.to_lowercase().contains(&pattern.to_lowercase()))
}

fn encode_markdown(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for chunk in chunks {
        out.push_str(&format!("## {}\n\n", chunk.summary));
        out.push_str(&format!("- id: {}\n- type: {}\n- repository: {}\n- timestamp: {}\n\n", chunk.id, chunk.r#type.as_str(), chunk.repository(), chunk.timestamp));
        out.push_str(&chunk.content);
        out.push_str("\n\n---\n\n");
    }
    out
}

fn encode_csv(chunks: &[Chunk]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["id", "repository", "type", "session_id", "summary", "content", "content_hash"])
        .map_err(|e| Error::generic(e.to_string()))?;
    for chunk in chunks {
        writer
            .write_record([
                chunk.id.to_string(),
                chunk.repository().to_string(),
                chunk.r#type.as_str().to_string(),
                chunk.session_id.to_string(),
                chunk.summary.clone(),
                chunk.content.clone(),
                chunk.content_hash.clone(),
            ])
            .map_err(|e| Error::generic(e.to_string()))?;
    }
    writer.into_inner().map_err(|e| Error::generic(e.to_string()))
}

fn decode_csv(data: &[u8]) -> Result<Vec<Chunk>> {
    use mcb_domain::{ChunkMetadata, RepositoryName, SessionKey};

    let mut reader = csv::Reader::from_reader(data);
    let mut chunks = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::invalid_argument(format!("invalid csv row: {e}")))?;
        let repository = record.get(1).unwrap_or("_global");
        let r#type = record.get(2).and_then(|s| s.parse().ok()).unwrap_or(mcb_domain::ChunkType::Discussion);
        let content = record.get(5).unwrap_or_default().to_string();
        let summary = record.get(4).unwrap_or_default().to_string();
        let repo = RepositoryName::normalize(repository);
        let session_id = SessionKey::compose(&repo, record.get(3).unwrap_or("imported"), Utc::now().timestamp());
        chunks.push(Chunk {
            id: ChunkId::new(),
            session_id,
            timestamp: Utc::now(),
            r#type,
            content_hash: mcb_utils::hash::content_hash_str(&content),
            content,
            summary,
            embedding: None,
            metadata: ChunkMetadata::with_defaults(repo.as_str()),
            related_chunks: Vec::new(),
        });
    }
    Ok(chunks)
}

fn encode_archive(chunks: &[Chunk]) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(chunks).map_err(|e| Error::generic(e.to_string()))?;
    let mut zip_writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    zip_writer
        .start_file("chunks.json", zip::write::SimpleFileOptions::default())
        .map_err(|e| Error::generic(e.to_string()))?;
    zip_writer.write_all(&json).map_err(|e| Error::io(e.to_string()))?;
    let cursor = zip_writer.finish().map_err(|e| Error::generic(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn decode_archive(data: &[u8]) -> Result<Vec<Chunk>> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).map_err(|e| Error::invalid_argument(format!("invalid archive: {e}")))?;
    let mut file = archive.by_name("chunks.json").map_err(|e| Error::invalid_argument(format!("archive missing chunks.json: {e}")))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|e| Error::io(e.to_string()))?;
    serde_json::from_slice(&buf).map_err(|e| Error::invalid_argument(format!("invalid json in archive: {e}")))
}

fn compress(data: Vec<u8>, compression: Compression) -> Result<Vec<u8>> {
    match compression {
        Compression::None => Ok(data),
        Compression::Gzip => {
            let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(&data).map_err(|e| Error::io(e.to_string()))?;
            encoder.finish().map_err(|e| Error::io(e.to_string()))
        }
        Compression::Zip => {
            let mut zip_writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
            zip_writer
                .start_file("export.bin", zip::write::SimpleFileOptions::default())
                .map_err(|e| Error::generic(e.to_string()))?;
            zip_writer.write_all(&data).map_err(|e| Error::io(e.to_string()))?;
            let cursor = zip_writer.finish().map_err(|e| Error::generic(e.to_string()))?;
            Ok(cursor.into_inner())
        }
    }
}

fn sniff_format(data: &[u8]) -> ImportExportFormat {
    if data.starts_with(b"PK") {
        ImportExportFormat::Archive
    } else if data.first().is_some_and(|b| *b == b'{' || *b == b'[') {
        ImportExportFormat::Json
    } else {
        ImportExportFormat::Csv
    }
}
