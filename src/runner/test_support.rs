use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    /// Full response after an optional delay.
    Respond {
        status: u16,
        body: &'static str,
        delay: Duration,
    },
    /// Announces more body than it sends, then closes.
    Truncated { status: u16 },
    /// Accepts the request and stays silent.
    Hang(Duration),
}

impl Reply {
    pub(crate) const fn ok(body: &'static str) -> Self {
        Self::Respond {
            status: 200,
            body,
            delay: Duration::ZERO,
        }
    }

    pub(crate) const fn status(status: u16, body: &'static str) -> Self {
        Self::Respond {
            status,
            body,
            delay: Duration::ZERO,
        }
    }
}

pub(crate) struct MockServer {
    pub(crate) base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    /// Raw request heads received so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Serves `routes` keyed by request path; unknown paths get a 404.
pub(crate) fn spawn_mock_server(
    routes: Vec<(&'static str, Reply)>,
) -> Result<MockServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let seen = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            match listener.accept() {
                Ok((stream, _)) => {
                    let routes = Arc::clone(&routes);
                    let seen = Arc::clone(&seen);
                    thread::spawn(move || handle_client(stream, &routes, &seen));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(MockServer {
        base_url: format!("http://{}", addr),
        requests,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(
    mut stream: TcpStream,
    routes: &[(&'static str, Reply)],
    seen: &Mutex<Vec<String>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(head) = read_request(&mut stream) else {
        return;
    };
    let path = head
        .split_whitespace()
        .nth(1)
        .and_then(|target| target.split('?').next())
        .unwrap_or_default()
        .to_owned();
    if let Ok(mut guard) = seen.lock() {
        guard.push(head);
    }

    let reply = routes
        .iter()
        .find(|(route, _)| *route == path)
        .map_or(Reply::status(404, "{}"), |(_, reply)| reply.clone());
    let response = match reply {
        Reply::Respond {
            status,
            body,
            delay,
        } => {
            thread::sleep(delay);
            format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
        }
        Reply::Truncated { status } => format!(
            "HTTP/1.1 {} X\r\nContent-Length: 1000\r\nConnection: close\r\n\r\npartial",
            status
        ),
        Reply::Hang(duration) => {
            thread::sleep(duration);
            return;
        }
    };
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Reads the request head and drains any declared body.
fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];
    let head_end = loop {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(buffer.get(..read)?);
        if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
    };
    let head = String::from_utf8_lossy(data.get(..head_end)?).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let mut body_read = data.len().saturating_sub(head_end.saturating_add(4));
    while body_read < content_length {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            break;
        }
        body_read = body_read.saturating_add(read);
    }
    Some(head)
}
