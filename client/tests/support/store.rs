//! S3互換オブジェクトストアのモック

use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// バケット配下への任意キーのPUTを受け付け、ETagを返す
#[allow(dead_code)]
pub async fn mount_store(server: &MockServer, bucket: &str) {
    Mock::given(method("PUT"))
        .and(path_regex(format!("^/{}/.+", bucket)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"d41d8cd98f00b204e9800998ecf8427e\""),
        )
        .mount(server)
        .await;
}

/// バケット配下のDELETEを受け付ける（期待回数付き）
#[allow(dead_code)]
pub async fn mount_store_delete(server: &MockServer, bucket: &str, expected: u64) {
    Mock::given(method("DELETE"))
        .and(path_regex(format!("^/{}/.+", bucket)))
        .respond_with(ResponseTemplate::new(204))
        .expect(expected)
        .mount(server)
        .await;
}
