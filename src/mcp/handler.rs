//! MCP Tool Router and ServerHandler Implementation
//!
//! Every tool returns a single Markdown text block. Failures are rendered
//! into that block, so tools never surface protocol errors.

use crate::mcp::server::BinanceServer;
use crate::mcp::types::{
    AnnouncementParams, DepositAddressParams, IncomeHistoryParams, OptionalSymbolParam,
    SymbolParam, TradeHistoryParams, TransferHistoryParams,
};
use crate::tools;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, InitializeResult, ProtocolVersion,
    ServerCapabilities, ToolsCapability,
};
use rmcp::{tool, tool_handler, tool_router};

fn markdown(text: String) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router(vis = "pub")]
impl BinanceServer {
    #[tool(description = "Fetch the latest Binance announcements (max 20 per page)")]
    pub async fn fetch_latest_announcements(
        &self,
        params: Parameters<AnnouncementParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let AnnouncementParams { count, page } = params.0;
        markdown(tools::fetch_latest_announcements(self.api(), count, page).await)
    }

    /// Public endpoint, works without credentials
    #[tool(
        description = "Get the latest price for a symbol, or the top 20 symbols when no symbol is given"
    )]
    pub async fn get_ticker_price(
        &self,
        params: Parameters<OptionalSymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_ticker_price(self.api(), params.0.symbol.as_deref()).await)
    }

    #[tool(description = "Get 24-hour price change statistics for a trading pair")]
    pub async fn get_24hr_ticker(
        &self,
        params: Parameters<SymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_24hr_ticker(self.api(), &params.0.symbol).await)
    }

    #[tool(description = "Get spot account commissions, permissions and non-zero balances")]
    pub async fn get_account_info(&self) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_account_info(self.api()).await)
    }

    #[tool(description = "Get open spot orders, optionally for one symbol")]
    pub async fn get_spot_open_orders(
        &self,
        params: Parameters<OptionalSymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_spot_open_orders(self.api(), params.0.symbol.as_deref()).await)
    }

    #[tool(description = "Get recent spot trades for a symbol (limit max 1000, default 10)")]
    pub async fn get_spot_trade_history(
        &self,
        params: Parameters<TradeHistoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let TradeHistoryParams { symbol, limit } = params.0;
        markdown(tools::get_spot_trade_history(self.api(), &symbol, limit).await)
    }

    #[tool(description = "Get USDT-M futures balances and active positions")]
    pub async fn get_futures_account_balance(&self) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_futures_account_balance(self.api()).await)
    }

    #[tool(description = "Get open USDT-M futures orders, optionally for one symbol")]
    pub async fn get_futures_open_orders(
        &self,
        params: Parameters<OptionalSymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_futures_open_orders(self.api(), params.0.symbol.as_deref()).await)
    }

    #[tool(
        description = "Get futures income history (realized PnL, funding fees, commissions) with totals per asset"
    )]
    pub async fn get_futures_income_history(
        &self,
        params: Parameters<IncomeHistoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let IncomeHistoryParams {
            symbol,
            income_type,
            limit,
        } = params.0;
        markdown(
            tools::get_futures_income_history(
                self.api(),
                symbol.as_deref(),
                income_type.as_deref(),
                limit,
            )
            .await,
        )
    }

    #[tool(description = "Get the cross margin account summary and asset details")]
    pub async fn get_margin_account(&self) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_margin_account(self.api()).await)
    }

    #[tool(description = "Get isolated margin accounts, optionally for one symbol")]
    pub async fn get_isolated_margin_account(
        &self,
        params: Parameters<OptionalSymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_isolated_margin_account(self.api(), params.0.symbol.as_deref()).await)
    }

    #[tool(description = "Get a snapshot of assets across spot, futures and cross margin")]
    pub async fn get_asset_distribution(&self) -> Result<CallToolResult, ErrorData> {
        markdown(tools::get_asset_distribution(self.api()).await)
    }

    #[tool(description = "Get the deposit address for a coin, optionally on a specific network")]
    pub async fn get_deposit_address(
        &self,
        params: Parameters<DepositAddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let DepositAddressParams { coin, network } = params.0;
        markdown(tools::get_deposit_address(self.api(), &coin, network.as_deref()).await)
    }

    #[tool(description = "Get deposit history (limit max 1000, default 10)")]
    pub async fn get_deposit_history(
        &self,
        params: Parameters<TransferHistoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let TransferHistoryParams {
            coin,
            status,
            limit,
        } = params.0;
        markdown(tools::get_deposit_history(self.api(), coin.as_deref(), status, limit).await)
    }

    #[tool(description = "Get withdrawal history (limit max 1000, default 10)")]
    pub async fn get_withdraw_history(
        &self,
        params: Parameters<TransferHistoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let TransferHistoryParams {
            coin,
            status,
            limit,
        } = params.0;
        markdown(tools::get_withdraw_history(self.api(), coin.as_deref(), status, limit).await)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BinanceServer {
    /// Returns server information and capabilities
    ///
    /// This is called during MCP initialization to communicate server metadata
    /// and supported features to the client.
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "binance-assistant".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Binance Assistant".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Read-only Binance assistant. Market tools work without credentials; \
                account, futures, margin and wallet tools need BINANCE_API_KEY and \
                BINANCE_API_SECRET. Every tool returns Markdown."
                    .to_string(),
            ),
        }
    }
}
