use std::fs;
use std::path::Path;
use vk_comment_deleter::{App, Config};

/// 构造一个临时归档目录，返回其中的 comments 目录路径
fn make_archive(dir: &Path) -> std::path::PathBuf {
    let comments = dir.join("comments");
    fs::create_dir(&comments).expect("创建 comments 目录失败");
    comments
}

fn test_config(archive_dir: &Path) -> Config {
    Config {
        archive_dir: archive_dir.to_string_lossy().to_string(),
        access_token: "test-token".to_string(),
        request_delay_ms: 0,
        output_log_file: archive_dir
            .join("delete_log.txt")
            .to_string_lossy()
            .to_string(),
        ..Default::default()
    }
}

#[test]
fn test_initialize_rejects_missing_archive() {
    let config = Config {
        archive_dir: "/nonexistent/vk_archive".to_string(),
        access_token: "test-token".to_string(),
        ..Default::default()
    };

    assert!(App::initialize(config).is_err(), "缺失的归档目录应该初始化失败");
}

#[tokio::test]
async fn test_run_with_no_html_files() {
    let dir = tempfile::tempdir().unwrap();
    make_archive(dir.path());

    let app = App::initialize(test_config(dir.path())).expect("初始化失败");
    let stats = app.run().await.expect("运行失败");

    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.comments_found, 0);
}

/// 一个文件内容不是合法 UTF-8，读取失败；另一个文件正常。
/// 失败的文件只记日志，不影响后续文件，也不计入任何计数。
#[tokio::test]
async fn test_run_isolates_per_file_failures() {
    let dir = tempfile::tempdir().unwrap();
    let comments = make_archive(dir.path());

    // 正常文件：1 条格式不正确的链接（examined=1，不会触发网络调用）
    fs::write(
        comments.join("a.html"),
        r#"<div class="item"><a href="https://vk.com/wall1_2">нет reply</a></div>"#,
    )
    .unwrap();

    // 损坏文件：非法 UTF-8 字节序列
    fs::write(comments.join("broken.html"), [0xFF, 0xFE, 0xFD]).unwrap();

    let app = App::initialize(test_config(dir.path())).expect("初始化失败");
    let stats = app.run().await.expect("运行失败");

    assert_eq!(stats.files_processed, 1, "只有正常文件计入统计");
    assert_eq!(stats.comments_found, 1);
    assert_eq!(stats.comments_deleted, 0);
    assert_eq!(stats.comments_failed, 0);
}

#[tokio::test]
async fn test_run_skips_non_html_files() {
    let dir = tempfile::tempdir().unwrap();
    let comments = make_archive(dir.path());

    fs::write(comments.join("readme.txt"), "не html").unwrap();
    fs::write(
        comments.join("a.html"),
        r#"<div class="item"><a href="https://vk.com/photo1_2">фото</a></div>"#,
    )
    .unwrap();

    let app = App::initialize(test_config(dir.path())).expect("初始化失败");
    let stats = app.run().await.expect("运行失败");

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.comments_found, 0);
}

/// 完整的真实删除运行，需要真实 token 和归档：
/// VK_ACCESS_TOKEN=... VK_ARCHIVE_DIR=... cargo test -- --ignored
#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_full_run_against_real_api() {
    vk_comment_deleter::logger::init(true);

    let config = Config::from_env();

    let app = App::initialize(config).expect("初始化失败");
    let stats = app.run().await.expect("运行失败");

    println!(
        "处理文件 {}，找到 {}，删除 {}，失败 {}",
        stats.files_processed, stats.comments_found, stats.comments_deleted, stats.comments_failed
    );
}
