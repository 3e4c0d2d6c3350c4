//! MCP tool dispatch (spec §6): the `memory_<verb>` tool surface and the
//! browsable `memory://` resources, wired over the reference in-memory
//! store/engine stack.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, Implementation, ListResourceTemplatesResult,
    ListResourcesResult, PaginatedRequestParams, ProtocolVersion, RawResource, RawResourceTemplate,
    ReadResourceRequestParams, ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, tool, tool_handler, tool_router};
use serde::de::DeserializeOwned;
use serde_json::json;

use mcb_domain::entities::alias::{AliasTarget, AliasType};
use mcb_domain::entities::conflict::ResolutionStrategy;
use mcb_domain::entities::relationship::{ConfidenceSource, Direction, RelationType};
use mcb_domain::entities::thread::ThreadType;
use mcb_domain::ports::{
    AliasFilter, AliasRepository, AliasServiceInterface, BulkServiceInterface, ChunkRepository,
    ConflictServiceInterface, CreateThreadInput, DecayServiceInterface, EmbeddingProvider,
    IngestionServiceInterface, LinkChunksInput, MemorySearchQuery, MemorySearchServiceInterface,
    RelationshipRepository, RelationshipServiceInterface, TaskServiceInterface, ThreadRepository,
    ThreadingServiceInterface, UpdateTaskInput,
};
use mcb_domain::{
    BulkOperationId, BulkOptions, BulkPayload, ChunkId, ChunkType, Compression, ExportFilter,
    ImportExportFormat, RelationshipId, TaskPriority, TaskStatus, ThreadId,
};

use crate::embedding::HashingEmbeddingProvider;
use crate::engine::{AliasEngine, BulkEngine, ConflictEngine, DecayEngine, IngestionEngine, MemorySearchEngine, RelationshipEngine, SearchConfig, TaskEngine, ThreadingEngine};
use crate::error::to_mcp_error;
use crate::params::{
    AutoDetectRelationshipsParams, BulkDeleteParams, BulkProgressParams, CancelBulkOperationParams,
    CheckFreshnessParams, ConflictsParams, CreateAliasParams, CreateTaskParams, CreateThreadParams,
    DecaySweepParams, ExportProjectParams, GetContextParams, GetRelationshipsParams, GetThreadParams,
    HealthParams, ImportContextParams, LinkParams, ListAliasesParams, ListTasksParams, ResolveAliasParams,
    ResolveConflictsParams, SearchParams, SecureBulkDeleteParams, StoreChunkParams, SuggestThreadParams,
    UpdateTaskParams,
};
use crate::store::{InMemoryAliasRepository, InMemoryBulkProgressStore, InMemoryChunkRepository, InMemoryRelationshipRepository, InMemoryThreadRepository};

fn ok_json<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Parse a snake_case domain enum from a free-form string, relying on the
/// enum's own `#[serde(rename_all = "snake_case")]` `Deserialize` impl.
fn parse_enum<T: DeserializeOwned>(field: &str, raw: &str) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| McpError::invalid_params(format!("invalid {field}: '{raw}'"), None))
}

fn parse_chunk_types(types: &Option<Vec<String>>) -> Result<Option<Vec<ChunkType>>, McpError> {
    types
        .as_ref()
        .map(|ts| {
            ts.iter()
                .map(|t| t.parse::<ChunkType>().map_err(|e| McpError::invalid_params(e, None)))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
}

fn chunk_id(raw: &str) -> ChunkId {
    ChunkId::from_string(raw)
}

/// The semantic memory engine's MCP tool surface and resource browser.
#[derive(Clone)]
pub struct McbMcpServer {
    tool_router: ToolRouter<Self>,
    ingestion: Arc<IngestionEngine>,
    search: Arc<MemorySearchEngine>,
    relationships: Arc<RelationshipEngine>,
    threading: Arc<ThreadingEngine>,
    conflicts: Arc<ConflictEngine>,
    decay: Arc<DecayEngine>,
    aliases: Arc<AliasEngine>,
    tasks: Arc<TaskEngine>,
    bulk: Arc<BulkEngine>,
    chunks: Arc<dyn ChunkRepository>,
}

#[tool_router]
impl McbMcpServer {
    #[tool(name = "memory_store_chunk", description = "Store a conversation fragment in semantic memory. Classifies, embeds, and persists it, then asynchronously attempts to auto-detect relationships to nearby chunks in the same repository.")]
    pub async fn store_chunk(&self, Parameters(params): Parameters<StoreChunkParams>) -> Result<CallToolResult, McpError> {
        let r#type = params.r#type.as_deref().map(str::parse::<ChunkType>).transpose().map_err(|e| McpError::invalid_params(e, None))?;
        let parent_chunk = params.parent_chunk.as_deref().map(chunk_id);
        let input = mcb_domain::ports::StoreChunkInput {
            content: params.content,
            session_id: params.session_id,
            repository: params.repository,
            branch: params.branch,
            files_modified: params.files_modified,
            tools_used: params.tools_used,
            tags: params.tags,
            client_type: None,
            r#type,
            parent_chunk,
        };
        let out = self.ingestion.store_chunk(input).await.map_err(|e| to_mcp_error(e, "store_chunk"))?;
        ok_json(&out_as_json(&out))
    }

    #[tool(name = "memory_search", description = "Progressive-fallback semantic + full-text search over stored chunks, widening scope through four tiers (strict, relaxed relevance, related repository, broadest) until it finds results.")]
    pub async fn search(&self, Parameters(params): Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        let types = parse_chunk_types(&params.types)?;
        let query = MemorySearchQuery {
            query: params.query,
            repository: params.repository,
            types,
            limit: params.limit,
            min_relevance: params.min_relevance,
            recency_bias: None,
        };
        if params.index_only {
            let index = self.search.memory_search(query).await.map_err(|e| to_mcp_error(e, "search"))?;
            return ok_json(&index);
        }
        let outcome = if params.secure {
            self.search.secure_search(query).await.map_err(|e| to_mcp_error(e, "search"))?
        } else {
            self.search.search(query).await.map_err(|e| to_mcp_error(e, "search"))?
        };
        ok_json(&outcome_as_json(&outcome))
    }

    #[tool(name = "memory_get_context", description = "Retrieve the chunks immediately before and after an anchor chunk in timeline order, for progressive disclosure.")]
    pub async fn get_context(&self, Parameters(params): Parameters<GetContextParams>) -> Result<CallToolResult, McpError> {
        let chunks = self
            .ingestion
            .get_timeline(&chunk_id(&params.chunk_id), params.before, params.after, None)
            .await
            .map_err(|e| to_mcp_error(e, "get_context"))?;
        ok_json(&chunks)
    }

    #[tool(name = "memory_link", description = "Create an explicit relationship edge between two chunks. Rejects self-loops and duplicate (source, target, relation_type) triples.")]
    pub async fn link(&self, Parameters(params): Parameters<LinkParams>) -> Result<CallToolResult, McpError> {
        let relation_type: RelationType = parse_enum("relation_type", &params.relation_type)?;
        let input = LinkChunksInput {
            source_id: chunk_id(&params.source_id),
            target_id: chunk_id(&params.target_id),
            relation_type,
            confidence: params.confidence,
            confidence_source: ConfidenceSource::Explicit,
        };
        let id = self.relationships.link_chunks(input).await.map_err(|e| to_mcp_error(e, "link"))?;
        ok_json(&json!({"relationship_id": id.to_string()}))
    }

    #[tool(name = "memory_get_relationships", description = "Bounded breadth-first traversal of the relationship graph from a chunk, returning scored paths.")]
    pub async fn get_relationships(&self, Parameters(params): Parameters<GetRelationshipsParams>) -> Result<CallToolResult, McpError> {
        let direction: Direction = parse_enum("direction", &params.direction)?;
        let paths = self
            .relationships
            .get_related(&chunk_id(&params.chunk_id), direction, params.max_depth, None)
            .await
            .map_err(|e| to_mcp_error(e, "get_relationships"))?;
        ok_json(&paths)
    }

    #[tool(name = "memory_auto_detect_relationships", description = "Run the four auto-relationship detectors (temporal, causal, reference, problem-solution) against a chunk's same-repository neighborhood and persist any edges above the confidence floor.")]
    pub async fn auto_detect_relationships(&self, Parameters(params): Parameters<AutoDetectRelationshipsParams>) -> Result<CallToolResult, McpError> {
        let ids = self
            .relationships
            .auto_detect(&chunk_id(&params.chunk_id))
            .await
            .map_err(|e| to_mcp_error(e, "auto_detect_relationships"))?;
        ok_json(&ids.iter().map(RelationshipId::to_string).collect::<Vec<_>>())
    }

    #[tool(name = "memory_create_thread", description = "Group a set of existing chunks into a named thread representing one coherent unit of work.")]
    pub async fn create_thread(&self, Parameters(params): Parameters<CreateThreadParams>) -> Result<CallToolResult, McpError> {
        let r#type: ThreadType = parse_enum("type", &params.r#type)?;
        let chunk_ids = params.chunk_ids.iter().map(|s| chunk_id(s)).collect();
        let input = CreateThreadInput { title: params.title, description: params.description, r#type, repository: params.repository, chunk_ids, tags: params.tags };
        let id = self.threading.create_thread(input).await.map_err(|e| to_mcp_error(e, "create_thread"))?;
        ok_json(&json!({"thread_id": id.to_string()}))
    }

    #[tool(name = "memory_get_thread", description = "Fetch a thread, optionally with a computed progress/health rollup.")]
    pub async fn get_thread(&self, Parameters(params): Parameters<GetThreadParams>) -> Result<CallToolResult, McpError> {
        let thread_id = ThreadId::from_string(&params.thread_id);
        let result = self.threading.get_thread(&thread_id, params.include_summary).await.map_err(|e| to_mcp_error(e, "get_thread"))?;
        match result {
            Some((thread, rollup)) => ok_json(&json!({"thread": thread, "rollup": rollup})),
            None => Err(McpError::resource_not_found(format!("thread {thread_id}"), None)),
        }
    }

    #[tool(name = "memory_suggest_thread", description = "Suggest an existing active thread that a chunk belongs to, based on temporal/session proximity or relationship-graph adjacency.")]
    pub async fn suggest_thread(&self, Parameters(params): Parameters<SuggestThreadParams>) -> Result<CallToolResult, McpError> {
        let suggestion = self.threading.suggest_thread(&chunk_id(&params.chunk_id)).await.map_err(|e| to_mcp_error(e, "suggest_thread"))?;
        ok_json(&json!({"thread_id": suggestion.map(|id| id.to_string())}))
    }

    #[tool(name = "memory_conflicts", description = "Detect pairwise contradictions between a chunk and its same-repository neighborhood (opposing outcomes, architectural decisions, or unlinked methodology drift).")]
    pub async fn conflicts(&self, Parameters(params): Parameters<ConflictsParams>) -> Result<CallToolResult, McpError> {
        let conflicts = self.conflicts.detect(&chunk_id(&params.chunk_id)).await.map_err(|e| to_mcp_error(e, "conflicts"))?;
        ok_json(&conflicts)
    }

    #[tool(name = "memory_resolve_conflicts", description = "Re-detect the conflict between two specific chunks and propose ranked resolution strategies.")]
    pub async fn resolve_conflicts(&self, Parameters(params): Parameters<ResolveConflictsParams>) -> Result<CallToolResult, McpError> {
        let a = chunk_id(&params.chunk_a);
        let b = chunk_id(&params.chunk_b);
        let candidates = self.conflicts.detect(&a).await.map_err(|e| to_mcp_error(e, "resolve_conflicts"))?;
        let Some(conflict) = candidates.into_iter().find(|c| (c.chunk_a == a && c.chunk_b == b) || (c.chunk_a == b && c.chunk_b == a)) else {
            return Err(McpError::resource_not_found(format!("no detected conflict between {a} and {b}"), None));
        };
        let strategies: Vec<ResolutionStrategy> = self.conflicts.propose_resolutions(&conflict).await.map_err(|e| to_mcp_error(e, "resolve_conflicts"))?;
        ok_json(&json!({"conflict": conflict, "strategies": strategies}))
    }

    #[tool(name = "memory_check_freshness", description = "Compute a chunk's decay score (time factor, importance multiplier, relationship bonus) plus human-readable alerts and suggested actions.")]
    pub async fn check_freshness(&self, Parameters(params): Parameters<CheckFreshnessParams>) -> Result<CallToolResult, McpError> {
        let status = self.decay.freshness(&chunk_id(&params.chunk_id)).await.map_err(|e| to_mcp_error(e, "check_freshness"))?;
        ok_json(&status)
    }

    #[tool(name = "memory_decay_management", description = "Non-mutating sweep of a repository's chunks, returning ids that have crossed the summarization or deletion decay threshold.")]
    pub async fn decay_management(&self, Parameters(params): Parameters<DecaySweepParams>) -> Result<CallToolResult, McpError> {
        let results = self.decay.sweep(&params.repository).await.map_err(|e| to_mcp_error(e, "decay_management"))?;
        ok_json(&results.into_iter().map(|(id, class)| json!({"chunk_id": id.to_string(), "classification": class})).collect::<Vec<_>>())
    }

    #[tool(name = "memory_create_alias", description = "Create a named handle (e.g. '@bug-fixes') resolving to a saved query or a fixed set of chunk ids.")]
    pub async fn create_alias(&self, Parameters(params): Parameters<CreateAliasParams>) -> Result<CallToolResult, McpError> {
        let r#type: AliasType = parse_enum("type", &params.r#type)?;
        let target = if let Some(query) = params.query {
            AliasTarget::SavedQuery { query, repository: None }
        } else if let Some(ids) = params.chunk_ids {
            AliasTarget::ChunkIds { ids: ids.iter().map(|s| chunk_id(s)).collect() }
        } else {
            return Err(McpError::invalid_params("one of 'query' or 'chunk_ids' is required", None));
        };
        let id = self.aliases.create_alias(params.name, r#type, target, params.repository, params.tags).await.map_err(|e| to_mcp_error(e, "create_alias"))?;
        ok_json(&json!({"alias_id": id.to_string()}))
    }

    #[tool(name = "memory_resolve_alias", description = "Resolve an alias by name, re-running its saved query/filter against the current chunk set and recording the access.")]
    pub async fn resolve_alias(&self, Parameters(params): Parameters<ResolveAliasParams>) -> Result<CallToolResult, McpError> {
        let (chunks, trace) = self.aliases.resolve(&params.repository, &params.name).await.map_err(|e| to_mcp_error(e, "resolve_alias"))?;
        ok_json(&json!({"chunks": chunks, "trace": trace}))
    }

    #[tool(name = "memory_list_aliases", description = "List aliases, optionally filtered by repository and/or type.")]
    pub async fn list_aliases(&self, Parameters(params): Parameters<ListAliasesParams>) -> Result<CallToolResult, McpError> {
        let r#type = params.r#type.as_deref().map(|t| parse_enum::<AliasType>("type", t)).transpose()?;
        let filter = AliasFilter { r#type, repository: params.repository, tags: None, query: None, sort: None };
        let aliases = self.aliases.list_aliases(&filter).await.map_err(|e| to_mcp_error(e, "list_aliases"))?;
        ok_json(&aliases)
    }

    #[tool(name = "memory_create_task", description = "Create a task chunk tracked through the todo/in_progress/blocked/on_hold/completed/cancelled lifecycle.")]
    pub async fn create_task(&self, Parameters(params): Parameters<CreateTaskParams>) -> Result<CallToolResult, McpError> {
        let priority: TaskPriority = parse_enum("priority", &params.priority)?;
        let dependencies = params.dependencies.iter().map(|s| chunk_id(s)).collect();
        let id = self
            .tasks
            .create_task(params.content, params.repository, params.session_id, priority, dependencies)
            .await
            .map_err(|e| to_mcp_error(e, "create_task"))?;
        ok_json(&json!({"task_id": id.to_string()}))
    }

    #[tool(name = "memory_update_task", description = "Apply a status/priority/progress/assignee update to a task, enforcing the lifecycle transition table, and append a task_update chunk.")]
    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTaskParams>) -> Result<CallToolResult, McpError> {
        let status = params.status.as_deref().map(|s| parse_enum::<TaskStatus>("status", s)).transpose()?;
        let priority = params.priority.as_deref().map(|s| parse_enum::<TaskPriority>("priority", s)).transpose()?;
        let input = UpdateTaskInput { status, priority, assignee: params.assignee, progress: params.progress, time_spent_delta: params.time_spent_delta, note: params.note };
        let task = self.tasks.update_task(&chunk_id(&params.task_id), input).await.map_err(|e| to_mcp_error(e, "update_task"))?;
        ok_json(&task)
    }

    #[tool(name = "memory_list_tasks", description = "List task chunks in a repository, optionally filtered by status (or the 'active' shortcut) and assignee.")]
    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasksParams>) -> Result<CallToolResult, McpError> {
        let tasks = self
            .tasks
            .list_tasks(&params.repository, params.status.as_deref(), params.assignee.as_deref())
            .await
            .map_err(|e| to_mcp_error(e, "list_tasks"))?;
        ok_json(&tasks)
    }

    #[tool(name = "memory_bulk_delete", description = "Submit a batched delete job over a list of chunk ids. Returns immediately with an operation id; poll with memory_get_bulk_progress.")]
    pub async fn bulk_delete(&self, Parameters(params): Parameters<BulkDeleteParams>) -> Result<CallToolResult, McpError> {
        let ids = params.ids.iter().map(|s| chunk_id(s)).collect();
        let options = BulkOptions { continue_on_error: params.continue_on_error, dry_run: params.dry_run, ..BulkOptions::default() };
        let id = self.bulk.submit(BulkPayload::Delete(ids), options).await.map_err(|e| to_mcp_error(e, "bulk_delete"))?;
        ok_json(&json!({"operation_id": id.to_string()}))
    }

    #[tool(name = "memory_secure_bulk_delete", description = "Delete chunk ids synchronously, rejecting (and logging, without aborting) any id whose stored repository disagrees with the requested one.")]
    pub async fn secure_bulk_delete(&self, Parameters(params): Parameters<SecureBulkDeleteParams>) -> Result<CallToolResult, McpError> {
        let ids: Vec<ChunkId> = params.ids.iter().map(|s| chunk_id(s)).collect();
        let id = self.bulk.secure_delete(&params.repository, &ids).await.map_err(|e| to_mcp_error(e, "secure_bulk_delete"))?;
        ok_json(&json!({"operation_id": id.to_string()}))
    }

    #[tool(name = "memory_get_bulk_progress", description = "Poll progress for a running or completed bulk operation.")]
    pub async fn get_bulk_progress(&self, Parameters(params): Parameters<BulkProgressParams>) -> Result<CallToolResult, McpError> {
        let id = BulkOperationId::from_string(&params.operation_id);
        let progress = self.bulk.progress(&id).await.map_err(|e| to_mcp_error(e, "get_bulk_progress"))?;
        match progress {
            Some(p) => ok_json(&p),
            None => Err(McpError::resource_not_found(format!("bulk operation {id}"), None)),
        }
    }

    #[tool(name = "memory_cancel_bulk_operation", description = "Request cancellation of an in-flight bulk operation. Already-processed items are not rolled back.")]
    pub async fn cancel_bulk_operation(&self, Parameters(params): Parameters<CancelBulkOperationParams>) -> Result<CallToolResult, McpError> {
        let id = BulkOperationId::from_string(&params.operation_id);
        self.bulk.cancel(&id).await.map_err(|e| to_mcp_error(e, "cancel_bulk_operation"))?;
        ok_json(&json!({"cancelled": true}))
    }

    #[tool(name = "memory_export_project", description = "Export a repository's chunks as json, markdown, csv, or a zip archive, optionally gzip/zip-compressed. Returns base64-encoded bytes.")]
    pub async fn export_project(&self, Parameters(params): Parameters<ExportProjectParams>) -> Result<CallToolResult, McpError> {
        let format: ImportExportFormat = parse_enum("format", &params.format)?;
        let compression: Compression = parse_enum("compression", &params.compression)?;
        let filter = ExportFilter { repository: params.repository, ..ExportFilter::default() };
        let bytes = self.bulk.export(filter, format, compression).await.map_err(|e| to_mcp_error(e, "export_project"))?;
        ok_json(&json!({"data": base64_encode(&bytes), "format": params.format, "compression": params.compression}))
    }

    #[tool(name = "memory_import_context", description = "Import chunks from a previously exported, base64-encoded payload. 'auto' sniffs the format from content.")]
    pub async fn import_context(&self, Parameters(params): Parameters<ImportContextParams>) -> Result<CallToolResult, McpError> {
        let format: ImportExportFormat = parse_enum("format", &params.format)?;
        let bytes = base64_decode(&params.data).map_err(|e| McpError::invalid_params(format!("invalid base64 data: {e}"), None))?;
        let id = self.bulk.import(&bytes, format, BulkOptions::default()).await.map_err(|e| to_mcp_error(e, "import_context"))?;
        ok_json(&json!({"operation_id": id.to_string()}))
    }

    #[tool(name = "memory_health", description = "Liveness probe: repository count and engine status.")]
    pub async fn health(&self, Parameters(_params): Parameters<HealthParams>) -> Result<CallToolResult, McpError> {
        let repositories = self.chunks.list_repositories().await.map_err(|e| to_mcp_error(e, "health"))?;
        ok_json(&json!({"status": "ok", "repository_count": repositories.len()}))
    }
}

fn out_as_json(out: &mcb_domain::ports::StoreChunkOutput) -> serde_json::Value {
    json!({
        "chunk_id": out.chunk_id.to_string(),
        "type": out.r#type,
        "summary": out.summary,
        "stored_at": out.stored_at,
        "deduplicated": out.deduplicated,
    })
}

fn outcome_as_json(outcome: &mcb_domain::ports::MemorySearchOutcome) -> serde_json::Value {
    json!({
        "results": outcome.results,
        "tier_used": format!("{:?}", outcome.tier_used),
        "query_time_ms": outcome.query_time_ms,
        "total": outcome.total,
    })
}

fn base64_encode(bytes: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn base64_decode(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.decode(data)
}

#[tool_handler]
impl ServerHandler for McbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: "mcb".to_string(),
                title: Some("Semantic Memory Engine".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "A semantic memory service for conversational AI agents. Store conversation \
                 fragments with memory_store_chunk, recall them with memory_search, and browse \
                 memory://recent/{repo}, memory://patterns/{repo}, memory://decisions/{repo}, and \
                 memory://global/insights."
                    .to_string(),
            ),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        let templates = vec![
            RawResourceTemplate { uri_template: "memory://recent/{repository}".to_string(), name: "Recent chunks".to_string(), title: None, description: Some("Most recently stored chunks in a repository.".to_string()), mime_type: Some("application/json".to_string()), icons: None },
            RawResourceTemplate { uri_template: "memory://patterns/{repository}".to_string(), name: "Patterns".to_string(), title: None, description: Some("Architecture decisions and solutions recorded in a repository.".to_string()), mime_type: Some("application/json".to_string()), icons: None },
            RawResourceTemplate { uri_template: "memory://decisions/{repository}".to_string(), name: "Decisions".to_string(), title: None, description: Some("Architecture-decision chunks recorded in a repository.".to_string()), mime_type: Some("application/json".to_string()), icons: None },
            RawResourceTemplate { uri_template: "memory://global/insights".to_string(), name: "Global insights".to_string(), title: None, description: Some("Cross-repository summary statistics.".to_string()), mime_type: Some("application/json".to_string()), icons: None },
        ];
        Ok(ListResourceTemplatesResult { resource_templates: templates.into_iter().map(AnnotateAble::no_annotation).collect(), next_cursor: None, meta: None })
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let repositories = self.chunks.list_repositories().await.map_err(|e| to_mcp_error(e, "list_resources"))?;
        let mut resources = Vec::new();
        for repo in &repositories {
            resources.push(RawResource::new(format!("memory://recent/{repo}"), format!("Recent: {repo}")).no_annotation());
            resources.push(RawResource::new(format!("memory://decisions/{repo}"), format!("Decisions: {repo}")).no_annotation());
        }
        resources.push(RawResource::new("memory://global/insights", "Global insights").no_annotation());
        Ok(ListResourcesResult { resources, next_cursor: None, meta: None })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParams { uri, .. }: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let content = if let Some(repo) = uri.strip_prefix("memory://recent/") {
            let chunks = self.chunks.list_by_repository(repo, 20).await.map_err(|e| to_mcp_error(e, "read_resource"))?;
            serde_json::to_string_pretty(&chunks).map_err(|e| McpError::internal_error(e.to_string(), None))?
        } else if let Some(repo) = uri.strip_prefix("memory://patterns/") {
            let chunks = self.chunks.list_by_repository(repo, usize::MAX).await.map_err(|e| to_mcp_error(e, "read_resource"))?;
            let patterns: Vec<_> = chunks.into_iter().filter(|c| matches!(c.r#type, ChunkType::ArchitectureDecision | ChunkType::Solution)).collect();
            serde_json::to_string_pretty(&patterns).map_err(|e| McpError::internal_error(e.to_string(), None))?
        } else if let Some(repo) = uri.strip_prefix("memory://decisions/") {
            let chunks = self.chunks.list_by_repository(repo, usize::MAX).await.map_err(|e| to_mcp_error(e, "read_resource"))?;
            let decisions: Vec<_> = chunks.into_iter().filter(|c| c.r#type == ChunkType::ArchitectureDecision).collect();
            serde_json::to_string_pretty(&decisions).map_err(|e| McpError::internal_error(e.to_string(), None))?
        } else if uri == "memory://global/insights" {
            let repositories = self.chunks.list_repositories().await.map_err(|e| to_mcp_error(e, "read_resource"))?;
            serde_json::to_string_pretty(&json!({"repository_count": repositories.len(), "repositories": repositories})).map_err(|e| McpError::internal_error(e.to_string(), None))?
        } else {
            return Err(McpError::invalid_params(format!("unrecognized resource uri: {uri}"), None));
        };
        Ok(ReadResourceResult { contents: vec![ResourceContents::text(content, uri)] })
    }
}

impl McbMcpServer {
    /// Build the server over a fresh, fully self-contained in-memory
    /// reference stack — no external vector store, embedding model, or
    /// relationship database required.
    #[must_use]
    pub fn new() -> Self {
        let chunks: Arc<dyn ChunkRepository> = Arc::new(InMemoryChunkRepository::new());
        let relationships_repo: Arc<dyn RelationshipRepository> = Arc::new(InMemoryRelationshipRepository::new());
        let threads_repo: Arc<dyn ThreadRepository> = Arc::new(InMemoryThreadRepository::new());
        let aliases_repo: Arc<dyn AliasRepository> = Arc::new(InMemoryAliasRepository::new());
        let bulk_progress = Arc::new(InMemoryBulkProgressStore::new());
        let embeddings: Arc<dyn EmbeddingProvider> = Arc::new(HashingEmbeddingProvider::new());

        let relationship_engine = Arc::new(RelationshipEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo)));
        let ingestion = Arc::new(IngestionEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo), Arc::clone(&embeddings), Arc::clone(&relationship_engine)));
        let search = Arc::new(MemorySearchEngine::new(Arc::clone(&chunks), Arc::clone(&embeddings), SearchConfig::default()));
        let threading = Arc::new(ThreadingEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo), Arc::clone(&threads_repo)));
        let conflicts = Arc::new(ConflictEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo)));
        let decay = Arc::new(DecayEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo)));
        let aliases = Arc::new(AliasEngine::new(Arc::clone(&chunks), Arc::clone(&aliases_repo)));
        let tasks = Arc::new(TaskEngine::new(Arc::clone(&chunks)));
        let bulk = Arc::new(BulkEngine::new(Arc::clone(&chunks), Arc::clone(&relationships_repo), bulk_progress));

        Self {
            tool_router: Self::tool_router(),
            ingestion,
            search,
            relationships: relationship_engine,
            threading,
            conflicts,
            decay,
            aliases,
            tasks,
            bulk,
            chunks,
        }
    }
}

impl Default for McbMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
