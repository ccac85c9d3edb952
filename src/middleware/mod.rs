/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: トークン検証 gate / bearer_auth: ヘッダ抽出 / http: 横断的なレイヤ
 */
pub mod auth;
pub mod bearer_auth;
pub mod http;
