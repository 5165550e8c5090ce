//! Snapshot download: resolve the revision, then write every file.

use std::path::Path;

use futures_util::StreamExt;
use hfsnap_core::{AccessToken, SnapshotReport, SnapshotRequest};
use tokio::io::AsyncWriteExt;

use crate::error::{HfError, HfResult};
use crate::http::HttpBackend;
use crate::models::{HfRepoInfo, HfRepoRef};
use crate::parsing::{local_path_for, plan_snapshot};
use crate::progress::{ProgressThrottle, SnapshotProgress};
use crate::url::{build_resolve_url, build_revision_info_url};

use super::HfClient;

impl<B: HttpBackend> HfClient<B> {
    /// Fetch repository info (commit SHA and file listing) for a revision.
    pub(crate) async fn fetch_repo_info(
        &self,
        repo: &HfRepoRef,
        revision: &str,
        token: Option<&str>,
    ) -> HfResult<HfRepoInfo> {
        let url = build_revision_info_url(&self.config, repo, revision)?;
        self.backend.get_json(&url, token).await
    }

    /// Stream one repository file at `commit` into `dest`, replacing any
    /// existing file. Returns the number of bytes written.
    pub(crate) async fn download_file(
        &self,
        repo: &HfRepoRef,
        commit: &str,
        repo_path: &str,
        dest: &Path,
        token: Option<&str>,
    ) -> HfResult<u64> {
        let url = build_resolve_url(&self.config, repo, commit, repo_path)?;
        let mut stream = self.backend.get_stream(&url, token).await?;

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| HfError::io(dest, e))?;

        let mut throttle = ProgressThrottle::default();
        let mut downloaded = 0u64;
        while let Some(chunk) = stream.body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|e| HfError::io(dest, e))?;
            downloaded += chunk.len() as u64;

            if throttle.should_emit() {
                self.emit(&SnapshotProgress::Bytes {
                    path: repo_path.to_string(),
                    downloaded,
                    total: stream.content_length,
                });
            }
        }
        file.flush().await.map_err(|e| HfError::io(dest, e))?;

        Ok(downloaded)
    }

    /// Materialize the full snapshot described by `request`.
    ///
    /// Nothing touches the local disk until the revision has been resolved
    /// and every listed path has been validated.
    pub(crate) async fn snapshot(&self, request: &SnapshotRequest) -> HfResult<SnapshotReport> {
        let repo = HfRepoRef::new(request.kind, request.repo_id.as_str());
        let token = request.token.as_ref().map(AccessToken::as_str);

        tracing::info!(
            repo = %repo,
            revision = %request.revision,
            authenticated = token.is_some(),
            "Resolving snapshot"
        );
        let info = self.fetch_repo_info(&repo, &request.revision, token).await?;
        if let Some(ref reported) = info.id {
            if reported != &request.repo_id {
                tracing::debug!(
                    requested = %request.repo_id,
                    %reported,
                    "Hub reported a different repository id"
                );
            }
        }

        let plan = plan_snapshot(info, &request.local_dir)?;
        tracing::info!(commit = %plan.commit, files = plan.files.len(), "Snapshot resolved");
        self.emit(&SnapshotProgress::Planned {
            commit: plan.commit.clone(),
            total_files: plan.files.len(),
        });

        tokio::fs::create_dir_all(&request.local_dir)
            .await
            .map_err(|e| HfError::io(&request.local_dir, e))?;

        let mut total_bytes = 0u64;
        for (index, repo_path) in plan.files.iter().enumerate() {
            let dest = local_path_for(&request.local_dir, repo_path)?;
            if let Some(parent) = dest.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| HfError::io(parent, e))?;
            }

            self.emit(&SnapshotProgress::FileStarted {
                index,
                path: repo_path.clone(),
            });
            let bytes = self
                .download_file(&repo, &plan.commit, repo_path, &dest, token)
                .await?;
            tracing::debug!(path = %repo_path, bytes, "File written");
            self.emit(&SnapshotProgress::FileFinished {
                path: repo_path.clone(),
                bytes,
            });

            total_bytes += bytes;
        }

        tracing::info!(
            local_dir = %request.local_dir.display(),
            files = plan.files.len(),
            total_bytes,
            "Snapshot complete"
        );

        Ok(SnapshotReport {
            repo_id: request.repo_id.clone(),
            commit_sha: plan.commit,
            local_dir: request.local_dir.clone(),
            files: plan.files,
            total_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::progress::ProgressCallback;
    use hfsnap_core::RepoKind;
    use serde_json::json;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const INFO_PATTERN: &str = "/api/datasets/wyzelabs/RuleRecommendation/revision/main";

    fn dataset_backend() -> FakeBackend {
        FakeBackend::new()
            .with_response(
                INFO_PATTERN,
                CannedResponse::Json(json!({
                    "id": "wyzelabs/RuleRecommendation",
                    "sha": "c0ffee",
                    "siblings": [
                        {"rfilename": ".gitattributes"},
                        {"rfilename": "README.md"},
                        {"rfilename": "train/rules.csv"}
                    ]
                })),
            )
            .with_response(
                "resolve/c0ffee/.gitattributes",
                CannedResponse::body("*.csv filter=lfs\n"),
            )
            .with_response("resolve/c0ffee/README.md", CannedResponse::body("# Rules\n"))
            .with_response(
                "resolve/c0ffee/train/rules.csv",
                CannedResponse::Body(vec![b"id,rule\n".to_vec(), b"1,a\n2,b\n".to_vec()]),
            )
    }

    fn request(dir: &TempDir) -> SnapshotRequest {
        SnapshotRequest::new(
            "wyzelabs/RuleRecommendation",
            RepoKind::Dataset,
            dir.path().join("data"),
        )
        .with_token(AccessToken::new("abc123\n"))
    }

    fn read_tree(root: &Path) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    let rel = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
                    out.push((rel, fs::read_to_string(&path).unwrap()));
                }
            }
        }
        out.sort();
        out
    }

    #[tokio::test]
    async fn test_snapshot_writes_every_listed_file() {
        let dir = TempDir::new().unwrap();
        let client = HfClient::with_backend(test_config(), dataset_backend());

        let report = client.snapshot(&request(&dir)).await.unwrap();

        assert_eq!(report.commit_sha, "c0ffee");
        assert_eq!(report.files, vec![".gitattributes", "README.md", "train/rules.csv"]);
        assert_eq!(report.total_bytes, 17 + 8 + 16);

        let root = dir.path().join("data");
        assert_eq!(
            fs::read_to_string(root.join("train/rules.csv")).unwrap(),
            "id,rule\n1,a\n2,b\n"
        );
        assert_eq!(read_tree(&root).len(), 3);
    }

    #[tokio::test]
    async fn test_snapshot_passes_raw_token_to_every_request() {
        let dir = TempDir::new().unwrap();
        let backend = dataset_backend();
        let client = HfClient::with_backend(test_config(), backend.clone());

        client.snapshot(&request(&dir)).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 4);
        assert!(requests[0].url.contains(INFO_PATTERN));
        assert!(requests
            .iter()
            .all(|r| r.token.as_deref() == Some("abc123\n")));
    }

    #[tokio::test]
    async fn test_snapshot_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let client = HfClient::with_backend(test_config(), dataset_backend());
        let root = dir.path().join("data");

        client.snapshot(&request(&dir)).await.unwrap();
        let first = read_tree(&root);
        client.snapshot(&request(&dir)).await.unwrap();
        let second = read_tree(&root);

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_snapshot_overwrites_stale_local_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("README.md"), "stale contents that are longer").unwrap();

        let client = HfClient::with_backend(test_config(), dataset_backend());
        client.snapshot(&request(&dir)).await.unwrap();

        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# Rules\n");
    }

    #[tokio::test]
    async fn test_rejected_token_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::new().with_response(INFO_PATTERN, CannedResponse::Status(401));
        let client = HfClient::with_backend(test_config(), backend.clone());

        let err = client.snapshot(&request(&dir)).await.unwrap_err();

        assert!(matches!(err, HfError::Unauthorized { status: 401, .. }));
        assert!(!dir.path().join("data").exists());
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_repository_is_not_found() {
        let dir = TempDir::new().unwrap();
        let client = HfClient::with_backend(test_config(), FakeBackend::new());

        let err = client.snapshot(&request(&dir)).await.unwrap_err();

        assert!(matches!(err, HfError::NotFound { .. }));
        assert!(!dir.path().join("data").exists());
    }

    #[tokio::test]
    async fn test_unsafe_listing_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::new().with_response(
            INFO_PATTERN,
            CannedResponse::Json(json!({
                "sha": "c0ffee",
                "siblings": [{"rfilename": "README.md"}, {"rfilename": "../../evil.sh"}]
            })),
        );
        let client = HfClient::with_backend(test_config(), backend.clone());

        let err = client.snapshot(&request(&dir)).await.unwrap_err();

        assert!(matches!(err, HfError::InvalidResponse { .. }));
        assert!(!dir.path().join("data").exists());
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_file_failure_stops_snapshot() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::new()
            .with_response(
                INFO_PATTERN,
                CannedResponse::Json(json!({
                    "sha": "c0ffee",
                    "siblings": [{"rfilename": "README.md"}, {"rfilename": "gone.csv"}]
                })),
            )
            .with_response("resolve/c0ffee/README.md", CannedResponse::body("# Rules\n"))
            .with_response("resolve/c0ffee/gone.csv", CannedResponse::Status(500));
        let client = HfClient::with_backend(test_config(), backend);

        let err = client.snapshot(&request(&dir)).await.unwrap_err();

        assert!(matches!(err, HfError::ApiRequestFailed { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_snapshot_reports_progress() {
        let dir = TempDir::new().unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let callback: ProgressCallback = Arc::new(move |event: &SnapshotProgress| {
            sink.lock().unwrap().push(event.clone());
        });
        let client =
            HfClient::with_backend(test_config(), dataset_backend()).with_progress(callback);

        client.snapshot(&request(&dir)).await.unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events[0],
            SnapshotProgress::Planned {
                commit: "c0ffee".to_string(),
                total_files: 3
            }
        );
        let finished: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                SnapshotProgress::FileFinished { path, bytes } => Some((path.as_str(), *bytes)),
                _ => None,
            })
            .collect();
        assert_eq!(
            finished,
            vec![(".gitattributes", 17), ("README.md", 8), ("train/rules.csv", 16)]
        );
    }

    #[tokio::test]
    async fn test_anonymous_request_sends_no_token() {
        let dir = TempDir::new().unwrap();
        let backend = dataset_backend();
        let client = HfClient::with_backend(test_config(), backend.clone());
        let request = SnapshotRequest::new(
            "wyzelabs/RuleRecommendation",
            RepoKind::Dataset,
            dir.path().join("data"),
        );

        client.snapshot(&request).await.unwrap();

        assert!(backend.requests().iter().all(|r| r.token.is_none()));
    }

    mod reqwest_backend {
        use super::*;
        use crate::client::DefaultHfClient;
        use crate::config::HfClientConfig;
        use hfsnap_core::{SnapshotError, SnapshotFetcherPort};
        use std::net::SocketAddr;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};

        const INFO_BODY: &[u8] =
            br#"{"sha":"abc","siblings":[{"rfilename":"a b.txt"},{"rfilename":"d/x.csv"}]}"#;

        /// Local HTTP/1.1 hub for `datasets/o/n` that only accepts `Bearer good`.
        async fn serve_hub() -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let seen = Arc::new(Mutex::new(Vec::new()));
            let log = Arc::clone(&seen);

            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    tokio::spawn(answer(stream, Arc::clone(&log)));
                }
            });
            (addr, seen)
        }

        async fn answer(mut stream: TcpStream, log: Arc<Mutex<Vec<String>>>) {
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                raw.extend_from_slice(&buf[..n]);
            }

            let head = String::from_utf8_lossy(&raw).into_owned();
            let mut lines = head.lines();
            let request_line = lines.next().unwrap_or_default().to_string();
            let authorized =
                lines.any(|line| line.eq_ignore_ascii_case("authorization: Bearer good"));
            log.lock().unwrap().push(request_line.clone());

            let path = request_line.split(' ').nth(1).unwrap_or_default();
            let (status, body): (&str, &[u8]) = if !authorized {
                ("401 Unauthorized", b"")
            } else {
                match path {
                    "/api/datasets/o/n/revision/main" => ("200 OK", INFO_BODY),
                    "/datasets/o/n/resolve/abc/a%20b.txt" => ("200 OK", b"hello"),
                    "/datasets/o/n/resolve/abc/d/x.csv" => ("200 OK", b"1,2\n"),
                    _ => ("404 Not Found", b""),
                }
            };

            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).await.unwrap();
            stream.write_all(body).await.unwrap();
            stream.shutdown().await.ok();
        }

        fn hub_client(addr: SocketAddr) -> DefaultHfClient {
            let config = HfClientConfig::new().with_endpoint(format!("http://{addr}"));
            DefaultHfClient::new(&config).unwrap()
        }

        fn hub_request(dir: &TempDir, token: &str) -> SnapshotRequest {
            SnapshotRequest::new("o/n", RepoKind::Dataset, dir.path().join("data"))
                .with_token(AccessToken::new(token))
        }

        #[tokio::test]
        async fn test_token_is_sent_as_bearer_and_files_are_written() {
            let (addr, seen) = serve_hub().await;
            let dir = TempDir::new().unwrap();

            let report = hub_client(addr)
                .fetch_snapshot(&hub_request(&dir, "good\n"))
                .await
                .unwrap();

            assert_eq!(report.commit_sha, "abc");
            assert_eq!(report.files, vec!["a b.txt", "d/x.csv"]);
            assert_eq!(report.total_bytes, 9);

            let root = dir.path().join("data");
            assert_eq!(fs::read_to_string(root.join("a b.txt")).unwrap(), "hello");
            assert_eq!(fs::read_to_string(root.join("d/x.csv")).unwrap(), "1,2\n");

            let seen = seen.lock().unwrap();
            assert_eq!(seen.len(), 3);
            assert!(seen.contains(&"GET /api/datasets/o/n/revision/main HTTP/1.1".to_string()));
            assert!(seen.contains(&"GET /datasets/o/n/resolve/abc/a%20b.txt HTTP/1.1".to_string()));
            assert!(seen.contains(&"GET /datasets/o/n/resolve/abc/d/x.csv HTTP/1.1".to_string()));
        }

        #[tokio::test]
        async fn test_rejected_token_over_http_writes_nothing() {
            let (addr, seen) = serve_hub().await;
            let dir = TempDir::new().unwrap();

            let err = hub_client(addr)
                .fetch_snapshot(&hub_request(&dir, "bad\n"))
                .await
                .unwrap_err();

            assert!(matches!(err, SnapshotError::AuthFailed { repo_id } if repo_id == "o/n"));
            assert!(!dir.path().join("data").exists());
            assert_eq!(seen.lock().unwrap().len(), 1);
        }
    }
}
