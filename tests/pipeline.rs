use base64::{engine::general_purpose::STANDARD, Engine};
use std::fs;
use std::ops::RangeInclusive;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_grab::selector::IdSource;
use xkcd_grab::{fetch_cartoons, run, Error, FetchRequest, XkcdClient};

const IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

/// Always the lowest id, and remembers how often it was asked.
#[derive(Default)]
struct CountingIds {
    calls: usize,
}

impl IdSource for CountingIds {
    fn next_id(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.calls += 1;
        *range.start()
    }
}

fn comic_page(server: &MockServer, caption: &str) -> String {
    format!(
        r#"<html><body>
        <img src="/s/0b7742.png" alt="xkcd.com logo">
        <div id="comic">
            <img src="//{host}/comics/x.png" title="{caption}" alt="x">
        </div>
        <img src="//{host}/comics/other.png" title="ignored">
        </body></html>"#,
        host = server.address()
    )
}

fn client(server: &MockServer) -> XkcdClient {
    XkcdClient::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap()
}

async fn mount_image(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/comics/x.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE))
        .mount(server)
        .await;
}

#[tokio::test]
async fn writes_single_cartoon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(&server, "caption")))
        .expect(1)
        .mount(&server)
        .await;
    mount_image(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(5, 5, 1, &out).unwrap();

    let written = run(&request, &client(&server)).await.unwrap();
    assert_eq!(1, written);

    let expected = format!(
        r#"{{
    "cartoons": [
        {{
            "cartoon": "{b64}",
            "text": "caption",
            "url": "http://{host}/comics/x.png"
        }}
    ],
    "info": "From xkcd.com"
}}"#,
        b64 = STANDARD.encode(IMAGE),
        host = server.address()
    );
    let json = fs::read_to_string(&out).unwrap();
    assert_eq!(expected, json);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let encoded = value["cartoons"][0]["cartoon"].as_str().unwrap();
    assert_eq!(IMAGE, STANDARD.decode(encoded).unwrap().as_slice());
}

#[tokio::test]
async fn failed_page_aborts_without_writing() {
    let server = MockServer::start().await;
    // Only the first page fetch succeeds, the second one gets a 404
    Mock::given(method("GET"))
        .and(path("/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(&server, "caption")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_image(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(5, 5, 3, &out).unwrap();

    let err = run(&request, &client(&server)).await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "{err:?}");
    assert!(!out.exists());
}

#[tokio::test]
async fn connection_error_aborts_without_writing() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = XkcdClient::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(1, 10, 3, &out).unwrap();

    let err = run(&request, &client).await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "{err:?}");
    assert!(!out.exists());
}

#[tokio::test]
async fn failed_image_aborts_without_writing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(&server, "caption")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/comics/x.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(5, 5, 1, &out).unwrap();

    let err = run(&request, &client(&server)).await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "{err:?}");
    assert!(!out.exists());
}

#[tokio::test]
async fn slow_page_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(comic_page(&server, "caption"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client =
        XkcdClient::new(&format!("{}/", server.uri()), Duration::from_millis(200)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(5, 5, 1, &out).unwrap();

    let err = run(&request, &client).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }), "{err:?}");
    assert!(!out.exists());
}

#[tokio::test]
async fn page_without_comic_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<img src="/s/0b7742.png">"#),
        )
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(5, 5, 2, &out).unwrap();

    let written = run(&request, &client(&server)).await.unwrap();

    assert_eq!(0, written);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(0, value["cartoons"].as_array().unwrap().len());
    assert_eq!("From xkcd.com", value["info"]);
}

#[tokio::test]
async fn one_draw_per_iteration_and_duplicates_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(comic_page(&server, "same")))
        .expect(4)
        .mount(&server)
        .await;
    mount_image(&server).await;

    let request = FetchRequest::new(7, 9, 4, "/tmp/unused.json").unwrap();
    let mut ids = CountingIds::default();

    let records = fetch_cartoons(&request, &client(&server), &mut ids)
        .await
        .unwrap();

    assert_eq!(4, ids.calls);
    assert_eq!(4, records.len());
    assert!(records.iter().all(|r| r == &records[0]));
    assert_eq!(Some("same"), records[0].caption.as_deref());
    assert_eq!(IMAGE, records[0].image.as_slice());
    assert_eq!(format!("{}/7", server.uri()), records[0].page_url.as_str());
}

#[tokio::test]
async fn zero_cartoons_writes_empty_document() {
    let server = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let request = FetchRequest::new(1, 1666, 0, &out).unwrap();

    let written = run(&request, &client(&server)).await.unwrap();

    assert_eq!(0, written);
    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(
        "{\n    \"cartoons\": [],\n    \"info\": \"From xkcd.com\"\n}",
        fs::read_to_string(&out).unwrap()
    );
}
