//! 結合寄りのテスト（スタブアダプタで usecase / repl を回す）

mod support;
