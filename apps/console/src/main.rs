//! # KanriFlow コンソール
//!
//! KanriFlow API をコマンドラインから操作する管理用クライアント。
//!
//! ## 役割
//!
//! - **認証**: ログイン・ログアウトとトークンのファイル保存
//! - **一覧取得**: 商品・請求書・従業員のページネーション付き一覧
//! - **セッション失効の検知**: API が 401 を返した場合は保存済み
//!   トークンを破棄し、再ログインを促して終了する
//!
//! ## 環境変数
//!
//! 設定は `.env` ファイルまたは環境変数で行う。環境の読み取りは
//! このエントリーポイントで一度だけ行い、ライブラリには明示的な
//! 設定として渡す。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_BASE` | No | API のベース URL（デフォルト: `http://127.0.0.1:3001`） |
//! | `TOKEN_FILE` | No | トークン保存先（デフォルト: `.kanriflow/token.json`） |
//! | `LOG_FORMAT` | No | ログ形式 `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,kanriflow=debug`） |
//!
//! ## 使用方法
//!
//! ```bash
//! kanriflow login <email> <password>
//! kanriflow me
//! kanriflow products [page] [limit]
//! kanriflow invoices [page] [limit]
//! kanriflow employees [page] [limit] [search]
//! kanriflow logout
//! ```

use std::{env, process::ExitCode, sync::Arc};

use anyhow::{Context, bail};
use kanriflow_client::{
    ApiConfig,
    ApiError,
    AuthApi,
    EmployeeApi,
    FileTokenStore,
    InvoiceApi,
    KanriClientImpl,
    ProductApi,
    SessionObserver,
};
use kanriflow_shared::{
    PaginationParams,
    observability::{TracingConfig, init_tracing},
};

/// トークン保存先のデフォルトパス
const DEFAULT_TOKEN_FILE: &str = ".kanriflow/token.json";

/// セッション失効時に再ログインを促すオブザーバー
///
/// トークンの破棄自体はクライアント側で行われるため、ここでは
/// 利用者への通知のみを担当する。
struct ReloginPrompt;

impl SessionObserver for ReloginPrompt {
    fn on_session_expired(&self) {
        eprintln!("セッションの有効期限が切れました。`kanriflow login` で再度ログインしてください");
    }
}

/// コンソールのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. クライアント設定の読み込み
/// 4. トークンストアとクライアントの構築
/// 5. サブコマンドの実行
#[tokio::main]
async fn main() -> ExitCode {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("console");
    init_tracing(tracing_config);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // セッション失効はオブザーバーが案内済みなので簡潔に終える
            if e.downcast_ref::<ApiError>()
                .is_none_or(|api| !matches!(api, ApiError::SessionExpired))
            {
                eprintln!("エラー: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // 設定読み込み（環境の読み取りはここで一度だけ）
    let config = ApiConfig::from_env();
    let token_file = env::var("TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string());

    tracing::debug!("API ベース URL: {}", config.base_url);
    tracing::debug!("トークン保存先: {}", token_file);

    let token_store = Arc::new(FileTokenStore::new(token_file));
    let client = KanriClientImpl::new(&config, token_store).with_observer(Arc::new(ReloginPrompt));

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        bail!("サブコマンドを指定してください");
    };

    match command.as_str() {
        "login" => {
            let [email, password] = &args[1..] else {
                bail!("使用方法: kanriflow login <email> <password>");
            };
            let response = client.login(email, password).await?;
            println!("ログインしました: {} <{}>", response.user.full_name, response.user.email);
        }
        "logout" => {
            client.logout().await?;
            println!("ログアウトしました");
        }
        "me" => {
            let user = client.me().await?;
            println!("{} <{}>", user.full_name, user.email);
            if let Some(role) = &user.role {
                println!("ロール: {role}");
            }
        }
        "products" => {
            let params = parse_pagination(&args[1..])?;
            let page = client.list_products(params).await?;
            for product in &page.data {
                println!(
                    "{}\t{}\t¥{:.2}\t在庫 {}",
                    product.id, product.name, product.sale_price, product.stock_quantity
                );
            }
            print_page_footer(page.page, page.total_pages, page.total);
        }
        "invoices" => {
            let params = parse_pagination(&args[1..])?;
            let page = client.list_invoices(params).await?;
            for invoice in &page.data {
                println!(
                    "{}\t{}\t¥{:.2}\t{}",
                    invoice.invoice_number, invoice.invoice_type, invoice.total, invoice.status
                );
            }
            print_page_footer(page.page, page.total_pages, page.total);
        }
        "employees" => {
            let params = parse_pagination(&args[1..])?;
            let search = args.get(3).map(String::as_str);
            let page = client.list_employees(params, search).await?;
            for employee in &page.data {
                println!(
                    "{}\t{}\t{}",
                    employee.employee_code,
                    employee.full_name,
                    employee.department.as_deref().unwrap_or("-")
                );
            }
            print_page_footer(page.page, page.total_pages, page.total);
        }
        other => {
            print_usage();
            bail!("不明なサブコマンド: {other}");
        }
    }

    Ok(())
}

/// 位置引数 `[page] [limit]` をページネーションパラメータに変換する
fn parse_pagination(args: &[String]) -> anyhow::Result<PaginationParams> {
    let page = args
        .first()
        .map(|s| s.parse::<u32>().with_context(|| format!("ページ番号が不正です: {s}")))
        .transpose()?;
    let limit = args
        .get(1)
        .map(|s| s.parse::<u32>().with_context(|| format!("件数が不正です: {s}")))
        .transpose()?;

    Ok(PaginationParams { page, limit })
}

fn print_page_footer(page: u32, total_pages: u64, total: u64) {
    println!("-- ページ {page}/{total_pages}（全 {total} 件）");
}

fn print_usage() {
    eprintln!("使用方法:");
    eprintln!("  kanriflow login <email> <password>");
    eprintln!("  kanriflow me");
    eprintln!("  kanriflow products [page] [limit]");
    eprintln!("  kanriflow invoices [page] [limit]");
    eprintln!("  kanriflow employees [page] [limit] [search]");
    eprintln!("  kanriflow logout");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_省略時はpageとlimitが未指定になる() {
        let params = parse_pagination(&[]).unwrap();

        assert_eq!(params, PaginationParams::default());
    }

    #[test]
    fn test_指定したpageとlimitがパースされる() {
        let args = vec!["2".to_string(), "50".to_string()];

        let params = parse_pagination(&args).unwrap();

        assert_eq!(params, PaginationParams::new(2, 50));
    }

    #[test]
    fn test_数値でないpageはエラーになる() {
        let args = vec!["abc".to_string()];

        assert!(parse_pagination(&args).is_err());
    }
}
