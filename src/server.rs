//! TCP listener and dispatcher.
//!
//! The accept loop hands every connection to its own tokio task and goes
//! straight back to `accept()`, so it never waits on client work.

use crate::commands::CommandHandler;
use crate::config::Framing;
use crate::connection::{handle_connection, ConnectionStats};
use crate::storage::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::error;

/// Accepts connections forever.
///
/// Accept failures are logged and the loop keeps going; only dropping the
/// future (e.g. on shutdown) stops it.
pub async fn accept_loop(
    listener: TcpListener,
    storage: Arc<Store>,
    framing: Framing,
    stats: Arc<ConnectionStats>,
) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let handler = CommandHandler::new(Arc::clone(&storage));
                let stats = Arc::clone(&stats);

                tokio::spawn(async move {
                    handle_connection(stream, addr, handler, framing, stats).await;
                });
            }
            Err(e) => {
                error!("Failed to accept connection: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpStream;

    async fn create_test_server(
        framing: Framing,
    ) -> (SocketAddr, Arc<Store>, Arc<ConnectionStats>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let storage = Arc::new(Store::new());
        let stats = Arc::new(ConnectionStats::new());

        tokio::spawn(accept_loop(
            listener,
            Arc::clone(&storage),
            framing,
            Arc::clone(&stats),
        ));

        (addr, storage, stats)
    }

    /// Sends one line and reads one reply line (without its `\n`).
    async fn request(client: &mut BufReader<TcpStream>, line: &str) -> String {
        client.get_mut().write_all(line.as_bytes()).await.unwrap();
        let mut reply = String::new();
        client.read_line(&mut reply).await.unwrap();
        reply.trim_end_matches('\n').to_string()
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let (addr, _, _) = create_test_server(Framing::Line).await;
        let mut client = BufReader::new(TcpStream::connect(addr).await.unwrap());

        assert_eq!(request(&mut client, "SET a 1\n").await, "OK");
        assert_eq!(request(&mut client, "SET b 2\n").await, "OK");

        // KEYS reply spans two lines: "*a" and "b"
        client.get_mut().write_all(b"KEYS *\n").await.unwrap();
        let mut keys = Vec::new();
        for _ in 0..2 {
            let mut line = String::new();
            client.read_line(&mut line).await.unwrap();
            keys.push(line.trim_end().trim_start_matches('*').to_string());
        }
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);

        assert_eq!(request(&mut client, "DEL a\n").await, ":1");
        assert_eq!(request(&mut client, "GET a\n").await, "(nil)");
    }

    #[tokio::test]
    async fn test_per_read_framing_over_tcp() {
        let (addr, storage, _) = create_test_server(Framing::PerRead).await;
        let mut client = TcpStream::connect(addr).await.unwrap();

        client.write_all(b"SET name Ariz").await.unwrap();
        let mut buf = [0u8; 64];
        let n = client.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"OK\n");

        client.write_all(b"GET name\n").await.unwrap();
        let n = client.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"Ariz\n");

        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_clients_share_the_store() {
        let (addr, _, _) = create_test_server(Framing::Line).await;

        let mut writer = BufReader::new(TcpStream::connect(addr).await.unwrap());
        let mut reader = BufReader::new(TcpStream::connect(addr).await.unwrap());

        assert_eq!(request(&mut writer, "SET shared yes\n").await, "OK");
        assert_eq!(request(&mut reader, "GET shared\n").await, "yes");
        assert_eq!(request(&mut reader, "EXISTS shared other\n").await, ":1");
    }

    #[tokio::test]
    async fn test_disconnect_does_not_affect_others() {
        let (addr, _, stats) = create_test_server(Framing::Line).await;

        let mut survivor = BufReader::new(TcpStream::connect(addr).await.unwrap());
        let leaver = TcpStream::connect(addr).await.unwrap();
        drop(leaver);

        assert_eq!(request(&mut survivor, "SET still here\n").await, "OK");

        // Wait, bounded, for the leaver's handler to notice the close
        let mut settled = false;
        for _ in 0..200 {
            if stats.connections_accepted.load(Ordering::Relaxed) == 2
                && stats.active_connections.load(Ordering::Relaxed) == 1
            {
                settled = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(
            settled,
            "accepted={} active={}",
            stats.connections_accepted.load(Ordering::Relaxed),
            stats.active_connections.load(Ordering::Relaxed)
        );

        assert_eq!(request(&mut survivor, "GET still\n").await, "here");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_clients_disjoint_keys() {
        let (addr, storage, _) = create_test_server(Framing::Line).await;

        let clients: Vec<_> = (0..8)
            .map(|id| {
                tokio::spawn(async move {
                    let mut client = BufReader::new(TcpStream::connect(addr).await.unwrap());
                    for i in 0..50 {
                        let key = format!("client{}:{}", id, i);
                        let set = format!("SET {} v{}\n", key, i);
                        assert_eq!(request(&mut client, &set).await, "OK");

                        let get = format!("GET {}\n", key);
                        assert_eq!(request(&mut client, &get).await, format!("v{}", i));

                        if i % 2 == 1 {
                            let del = format!("DEL {}\n", key);
                            assert_eq!(request(&mut client, &del).await, ":1");
                            assert_eq!(request(&mut client, &get).await, "(nil)");
                        }
                    }
                })
            })
            .collect();

        for client in clients {
            client.await.unwrap();
        }

        assert_eq!(storage.len(), 8 * 25);
    }
}
