use crate::models::stock::{validate_collection, Stock};
use crate::errors::{Result, SignalBoardError};
use crate::sources::base::StockSource;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

/// 通过 HTTP 拉取 JSON 格式的股票集合
pub struct HttpStockSource {
    client: Client,
    url: String,
}

impl HttpStockSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SignalBoardError::RequestError)?;

        Ok(Self::with_client(client, url))
    }

    /// 使用预先配置好的客户端（代理、证书等）
    pub fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StockSource for HttpStockSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_stocks(&self) -> Result<Vec<Stock>> {
        info!("Fetching stocks from {}", self.url);

        let response = self.client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SignalBoardError::DataLoadFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SignalBoardError::DataLoadFailure(format!(
                "HTTP status {}", response.status()
            )));
        }

        let text = response.text().await?;
        debug!("成功获取响应，{} 字节", text.len());

        let stocks: Vec<Stock> = serde_json::from_str(&text)?;
        validate_collection(&stocks)?;

        info!("成功获取 {} 支股票信息", stocks.len());
        Ok(stocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::board_service::{LoadState, SignalBoardService};
    use crate::sources::mock::sample_stocks;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 本地单次应答的 HTTP 服务，返回请求地址
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // 读完请求头再应答
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/stocks", addr)
    }

    fn local_source(url: &str) -> HttpStockSource {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpStockSource::with_client(client, url)
    }

    #[tokio::test]
    async fn ok_response_returns_collection() {
        let body = serde_json::to_string(&sample_stocks()).unwrap();
        let url = serve_once("HTTP/1.1 200 OK", body).await;

        let source = local_source(&url);
        assert_eq!(source.url(), url);
        let stocks = source.fetch_stocks().await.unwrap();
        assert_eq!(stocks.len(), 6);
        assert_eq!(stocks[0].symbol, "AAPL");
        assert_eq!(stocks[3].symbol, "TSLA");
    }

    #[tokio::test]
    async fn server_error_status_is_a_load_failure() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}".to_string()).await;

        let err = local_source(&url).fetch_stocks().await.unwrap_err();
        match err {
            SignalBoardError::DataLoadFailure(message) => assert!(message.contains("500")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_fails_the_board_load() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>not json</html>".to_string()).await;

        let service = SignalBoardService::new(Config::new(), Arc::new(local_source(&url)));
        let state = service.load().await;
        match state {
            LoadState::Failed { message } => {
                assert!(message.starts_with("Failed to load stocks data"));
                assert!(message.contains("JSON parsing error"));
            }
            other => panic!("expected failed state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_load_failure() {
        // 绑定后立即释放端口，确保无人监听
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/stocks", addr);
        let err = local_source(&url).fetch_stocks().await.unwrap_err();
        assert!(matches!(err, SignalBoardError::DataLoadFailure(_)));
    }

    #[test]
    fn new_builds_client_with_timeout() {
        let source = HttpStockSource::new("http://127.0.0.1:8000/api/stocks", Duration::from_secs(2)).unwrap();
        assert_eq!(source.name(), "http");
        assert_eq!(source.url(), "http://127.0.0.1:8000/api/stocks");
    }
}
