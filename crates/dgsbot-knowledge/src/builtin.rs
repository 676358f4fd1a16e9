//! Builtin DGS-Pay API documentation table.
//!
//! Ordering is load-bearing: matching is first-entry-first-keyword wins, so
//! more specific entries sit above entries whose keywords are substrings of
//! theirs. The token-expiry entry precedes the authentication entry because
//! "refresh token" contains "token"; the payout and card entries precede the
//! api-codes entry, which holds the bare "payout", "mobile", "card" and
//! "bank" triggers. With this order every keyword below, submitted verbatim
//! as an utterance, resolves to its own entry.

use crate::entry::KnowledgeEntry;

pub(crate) fn entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            &["token expired", "token expire", "refresh token", "expires_in"],
            TOKEN_EXPIRY,
            "authentication",
        ),
        KnowledgeEntry::new(
            &["next action", "payment instruction", "authorize", "authorise"],
            NEXT_ACTION,
            "responses",
        ),
        KnowledgeEntry::new(
            &["authentication", "auth", "token", "bearer", "login"],
            AUTHENTICATION,
            "authentication",
        ),
        KnowledgeEntry::new(
            &["secret key", "client secret", "get secret"],
            CLIENT_SECRET,
            "authentication",
        ),
        KnowledgeEntry::new(
            &["mobile money payout", "payout mobile", "send money", "withdraw mobile"],
            MOBILE_MONEY_PAYOUTS,
            "payouts",
        ),
        KnowledgeEntry::new(
            &["bank payout", "bank transfer", "payout bank", "withdraw bank"],
            BANK_PAYOUTS,
            "payouts",
        ),
        KnowledgeEntry::new(
            &["card payment", "card local", "card international", "visa", "mastercard"],
            CARD_PAYMENTS,
            "card-payments",
        ),
        KnowledgeEntry::new(
            &["mobile money", "mtn", "airtel", "vodafone", "mpesa"],
            MOBILE_MONEY,
            "mobile-money",
        ),
        KnowledgeEntry::new(
            &["api code", "available codes", "payin", "payout", "mobile", "card", "bank"],
            API_CODES,
            "api-codes",
        ),
        KnowledgeEntry::new(
            &["initiate payment", "start payment", "collect payment", "payment request"],
            INITIATE_PAYMENT,
            "payments",
        ),
        KnowledgeEntry::new(
            &["complete request", "full example", "example request"],
            COMPLETE_EXAMPLE,
            "payments",
        ),
        KnowledgeEntry::new(
            &["response format", "pending", "success", "failed", "status"],
            RESPONSE_FORMATS,
            "responses",
        ),
        KnowledgeEntry::new(
            &["error code", "error codes", "error 10400", "error 400", "errors"],
            ERROR_CODES,
            "errors",
        ),
        KnowledgeEntry::new(
            &["webhook", "callback", "webhook secret", "callback url", "webhook verification"],
            WEBHOOKS,
            "webhooks",
        ),
        KnowledgeEntry::new(
            &["reference field", "reference requirement", "alphanumeric", "reference validation"],
            REFERENCE_FIELD,
            "validation",
        ),
        KnowledgeEntry::new(
            &["customer name", "name requirement", "name validation"],
            CUSTOMER_NAME,
            "validation",
        ),
        KnowledgeEntry::new(
            &["rate limit", "limits", "usage", "throttle", "rate-limit"],
            RATE_LIMITS,
            "rate-limits",
        ),
        KnowledgeEntry::new(
            &["integration", "how to integrate", "get started", "setup", "quickstart", "quick start"],
            INTEGRATION,
            "integration",
        ),
        KnowledgeEntry::new(
            &["currency", "rwf", "ugx", "kes", "currencies"],
            CURRENCIES,
            "general",
        ),
        KnowledgeEntry::new(
            &["countries", "country code", "rwanda", "uganda", "kenya", "nigeria"],
            COUNTRIES,
            "general",
        ),
        KnowledgeEntry::new(
            &["fee", "fees", "transaction fee", "cost", "charge"],
            FEES,
            "general",
        ),
        KnowledgeEntry::new(
            &["testing", "test", "sandbox", "simulation", "test payment"],
            TESTING,
            "testing",
        ),
        KnowledgeEntry::new(
            &["security", "secure", "best practice", "security tips", "api security"],
            SECURITY,
            "security",
        ),
    ]
}

pub(crate) fn fallbacks() -> Vec<String> {
    [
        "I'm designed to help with DGS-Pay API documentation only. Could you ask a question about authentication, payments, webhooks, or error handling?",
        "I can only answer questions about the DGS-Pay API. Try asking about mobile money integration, token authentication, or payment endpoints.",
        "My expertise is limited to DGS-Pay payment API documentation. For general programming questions, I'd recommend other resources.",
        "I'm here to help with DGS-Pay API integration. Ask me about payment methods, authentication, webhooks, or troubleshooting!",
        "I can assist with DGS-Pay API questions. Topics I can help with include: authentication, mobile money payments, error codes, and integration setup.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

const AUTHENTICATION: &str = r#"🔑 **API Authentication**

All DGS API endpoints require Bearer Token authentication.

**Authentication Header:**
```
Authorization: Bearer YOUR_DGS_API_TOKEN
Content-Type: application/json
```

**Base URL:**
```
https://pay.digitalservicescenter.rw/api-v2
```

**Requesting a Token:**
```
POST /api-v2/token/{environment}
```

**Parameters:**
- `account_number` (string): Your DGS-assigned client account number
- `client_secret` (string): Secret key assigned for the environment
- `{environment}` must be either `live` or `sandbox`

**Example Request:**
```
curl -X POST "https://pay.digitalservicescenter.rw/api-v2/token/live" \
-H "Content-Type: application/x-www-form-urlencoded" \
-d "account_number=ACC-2322-0001" \
-d "client_secret=your_live_secret"
```

**Response:**
```
{
  "access_token": "a3f4e2d5b1c9f0...",
  "token_type": "Bearer",
  "expires_in": 600,
  "environment": "live"
}
```

⚠️ **Important:** Tokens expire after 10 minutes (600 seconds). Implement token refresh logic in your application."#;

const CLIENT_SECRET: &str = r#"🔐 **Client Secret**

To get your client secret:

1. **Login** to your DGS-Pay account or **create a new account**
2. Navigate to the **API Credentials** page
3. Go to the **Client Secret Section**
4. You'll find secrets for both sandbox and live environments

Keep your client secret secure and never share it publicly!"#;

const TOKEN_EXPIRY: &str = r#"⏰ **Token Expiration**

**Token Validity:** 10 minutes (600 seconds)

**Best Practice:** Implement token refresh logic in your application:

```javascript
// Check if token is about to expire
function shouldRefreshToken(expiresAt) {
    return Date.now() >= expiresAt - 60000; // Refresh 1 minute before expiry
}

// Refresh token if needed
if (shouldRefreshToken(tokenExpiry)) {
    token = await requestNewToken();
}
```

This prevents API calls from failing due to expired tokens."#;

const API_CODES: &str = r#"📋 **Available API Codes**

DGS-Pay supports the following payment types:

**Collection (Payin):**
- `PAYIN_MOBILE` - Mobile Money Collection
- `PAYIN_CARD_LOCAL` - Local Card Collection
- `PAYIN_CARD_INTL` - International Card Collection

**Payout:**
- `PAYOUT_BANK` - Bank Payouts
- `PAYOUT_MOBILE` - Mobile Money Payouts

Use these codes in your `api_code` parameter when initiating payments."#;

const MOBILE_MONEY: &str = r#"📱 **Mobile Money API**

Seamlessly integrate with MTN, Airtel, and Vodafone mobile money platforms.

**Supported Countries:** RW, UG, NG, KE

**Supported Providers:**
- MTN Mobile Money - Leading mobile money provider
- Airtel Money - Reliable mobile payments

**Endpoint:**
```
POST /api/init_payment
```

**Required Parameters:**

```json
{
  "pay_info": {
    "amount": 100,
    "currency": "RWF",
    "api_code": "PAYIN_MOBILE",
    "reference": "MMTEST001",
    "callback_url": "https://your-callback.url",
    "description": "Test Mobile Money Payment"
  },
  "from": {
    "payment_type": "mobile_money",
    "provider": "MTN",
    "name": "John Doe",
    "email": "john@example.com",
    "phone": "782589800",
    "country_code": "250"
  }
}
```

**Important:** Always provide the correct currency, country code, and provider for successful processing."#;

const INITIATE_PAYMENT: &str = r#"💳 **Initiating a Payment**

Use this endpoint to collect funds:

```
POST /api/init_payment
```

**Pay Info Parameters:**
- `amount` (numeric, required): Payment amount
- `currency` (string, required): ISO 4217 currency code (RWF, UGX, KES)
- `api_code` (string, required): Payment type code
- `reference` (string, required): Unique alphanumeric transaction reference (6-50 chars)
- `callback_url` (string, required): HTTPS URL for status updates
- `description` (string, optional): Payment description

**From Parameters:**
- `payment_type` (string, required): Payment method type
- `provider` (string, required): Provider name (for mobile money)
- `name` (string, required): Customer full name (2-50 characters)
- `email` (string, required): Customer email address
- `phone` (string, required): Customer phone number
- `country_code` (string, required): International country code

See the mobile money documentation for a complete example."#;

const COMPLETE_EXAMPLE: &str = r#"📝 **Complete Request Example**

Here's a complete mobile money payment request:

```json
{
  "pay_info": {
    "amount": 100,
    "currency": "RWF",
    "api_code": "PAYIN_MOBILE",
    "reference": "MMTEST001",
    "callback_url": "https://your-callback.url",
    "description": "Test Mobile Money Payment"
  },
  "from": {
    "payment_type": "mobile_money",
    "provider": "MTN",
    "name": "John Doe",
    "email": "john@example.com",
    "phone": "782589800",
    "country_code": "250"
  },
  "metadata": {
    "order_id": "12345",
    "custom_info": "DGS Mobile Money Test"
  },
  "simulation": {
    "context": "auth_pin",
    "response": "approved"
  }
}
```"#;

const RESPONSE_FORMATS: &str = r#"📊 **Response Formats**

**Pending/Success Response:**
```json
{
  "status": "pending",
  "message": "Charge created",
  "code": "02",
  "transaction_id": 100,
  "tx_ref": "MM1764319676",
  "payment_type": "mobile_money",
  "amount": 550,
  "currency": "RWF",
  "customer_id": "cus_haqG7fRTfv",
  "reference": "MM1764319676",
  "network": "MTN",
  "phone_number": "0782589800",
  "fee": 39,
  "next_action": {
    "type": "payment_instruction",
    "note": "Please authorise this payment on your mobile device..."
  }
}
```

**Error Response:**
```json
{
  "status": "failed",
  "message": "Request is not valid",
  "code": "10400",
  "transaction_id": 95,
  "tx_ref": "MM_1764318847",
  "payment_type": "mobile_money",
  "errors": {
    "reference": "must be an alphanumeric string"
  }
}
```

**Status Indicators:**
- `pending` - Awaiting customer authorization
- `success` - Payment completed successfully
- `failed` - Payment failed or was declined"#;

const NEXT_ACTION: &str = r#"🔔 **Next Action - Payment Authorization**

When a payment is `pending`, check the `next_action` field:

```json
"next_action": {
  "type": "payment_instruction",
  "note": "Please authorise this payment on your mobile device..."
}
```

This means the customer needs to:
1. Check their mobile device
2. Authorize the payment using their PIN
3. Wait for the status to update via webhook

The payment will complete once the customer authorizes it."#;

const ERROR_CODES: &str = r#"⚠️ **Error Codes**

Common error responses include:

**Error Response Structure:**
```json
{
  "status": "failed",
  "message": "Request is not valid",
  "code": "10400",
  "errors": {
    "reference": "must be an alphanumeric string"
  }
}
```

**Common Validation Errors:**
- `reference` - must be alphanumeric (6-50 characters)
- `name` - must be 2-50 characters, letters/spaces/punctuation only
- Missing required fields
- Invalid phone number format
- Invalid currency code

**Error Codes:**
- `10400` - Bad Request / Validation Error
- Check the `errors` object for specific field validation messages."#;

const WEBHOOKS: &str = r#"🔗 **Webhook Handling**

DGS sends final payment status updates to your configured `callback_url`.

**Webhook Security:**
All webhook requests include the `HTTP_DGS_WEBHOOK_SECRET` header for verification.

**Verification Example (PHP):**
```php
$webhookSecret = $_SERVER['HTTP_DGS_WEBHOOK_SECRET'];
if ($webhookSecret !== 'YOUR_WEBHOOK_SECRET') {
    http_response_code(401);
    exit('Unauthorized');
}
```

**Success Webhook Payload:**
```json
{
  "event": "transaction.completed",
  "status": "success",
  "direction": "collection",
  "reference": "PpSDagadPyP5",
  "transaction_id": 56,
  "amount": 550,
  "currency": "RWF",
  "fee": 38.5,
  "net_amount": 511.5,
  "payment_type": "mobile_money",
  "customer": {
    "phone": "2500782589800",
    "email": "serge.alain@gmail.com",
    "name": "Alain"
  },
  "beneficiary": null,
  "metadata": {
    "order_id": "1111",
    "custom_info": "Data analysis"
  },
  "created_at": "2025-12-15T12:42:32.453Z"
}
```

⚠️ **Always verify the webhook secret before processing webhook data!**"#;

const REFERENCE_FIELD: &str = r#"📝 **Reference Field Requirements**

The `reference` field has strict validation rules:

**Requirements:**
- **Length:** 6 to 50 characters
- **Allowed characters:** Letters (A-Z, a-z) and numbers (0-9) only
- **No special characters** (no spaces, hyphens, underscores, etc.)
- Must be unique for each transaction

**Valid Examples:**
- `PAY2024001`
- `TRANSACTIONID12345` ✅

**Invalid Examples:**
- `PAY-001` (contains hyphen)
- `PAY_001` (contains underscore)
- `PAY 001` (contains space)
- `abc` (too short)

**Best Practice:** Use a combination of your order ID and timestamp to ensure uniqueness."#;

const CUSTOMER_NAME: &str = r#"👤 **Customer Name Requirements**

The `name` field for customer information has specific requirements:

**Requirements:**
- **Length:** 2 to 50 characters
- Must be at least 2 characters

**Allowed Characters:**
- Letters (a-z, A-Z)
- Spaces
- Commas (,)
- Periods (.)
- Apostrophes (')
- Hyphens (-)

**Valid Examples:**
- `John Doe` ✅
- `Mary-Jane Smith` ✅
- `O'Connor` ✅
- `Dr. John Smith` ✅

**Invalid Examples:**
- `J` (too short - minimum 2 characters)
- `John123` (contains numbers)
- `John@Doe` (contains special character)

**Best Practice:** Use the customer's full name as it appears on their payment account."#;

const RATE_LIMITS: &str = r#"⚡ **Rate Limits**

Current DGS-Pay API does not specify explicit rate limits in the documentation.

**Best Practices:**
- Implement exponential backoff for failed requests
- Cache authentication tokens and refresh before expiration
- Use webhooks instead of polling for payment status
- Handle errors gracefully and retry where appropriate

**If you encounter rate limiting:**
- Implement proper error handling
- Add delays between retry attempts
- Contact DGS support for specific rate limit information

For production systems, consider implementing a request queue to manage high-volume traffic efficiently."#;

const CARD_PAYMENTS: &str = r#"💳 **Card Payments**

DGS-Pay supports two types of card collections:

**PAYIN_CARD_LOCAL**
- Local card collection
- Supports domestic payment cards
- Lower fees for local transactions

**PAYIN_CARD_INTL**
- International card collection
- Supports Visa, Mastercard, and other major cards
- Higher fees for international processing

**Basic Card Payment Structure:**
```json
{
  "pay_info": {
    "api_code": "PAYIN_CARD_LOCAL",
    "amount": 50000,
    "currency": "RWF",
    "reference": "CARD001",
    "callback_url": "https://your-callback.url"
  },
  "from": {
    "payment_type": "card"
  }
}
```

For complete card payment documentation, please refer to the official DGS-Pay API docs or contact support for specific card integration details."#;

const BANK_PAYOUTS: &str = r#"🏦 **Bank Payouts**

DGS-Pay supports bank payouts using the `PAYOUT_BANK` API code.

**Use Cases:**
- Paying vendors and suppliers
- Transferring funds to company accounts
- Customer refunds to bank accounts

**Basic Structure:**
```json
{
  "pay_info": {
    "api_code": "PAYOUT_BANK",
    "amount": 50000,
    "currency": "RWF",
    "reference": "BANK001",
    "callback_url": "https://your-callback.url"
  },
  "to": {
    "account_number": "recipient_account",
    "bank_code": "bank_identifier",
    "account_name": "account_holder_name"
  }
}
```

For complete bank payout documentation including required fields and supported banks, please contact DGS-Pay support."#;

const MOBILE_MONEY_PAYOUTS: &str = r#"📱 **Mobile Money Payouts**

DGS-Pay supports mobile money payouts using the `PAYOUT_MOBILE` API code.

**Supported Providers:**
- MTN Mobile Money
- Airtel Money

**Use Cases:**
- Customer refunds to mobile money
- Paying remote workers
- Disbursing commissions

**Basic Structure:**
```json
{
  "pay_info": {
    "api_code": "PAYOUT_MOBILE",
    "amount": 50000,
    "currency": "RWF",
    "reference": "PAYOUT001",
    "callback_url": "https://your-callback.url"
  },
  "to": {
    "payment_type": "mobile_money",
    "provider": "MTN",
    "phone": "782589800",
    "country_code": "250"
  }
}
```

For complete payout documentation, please refer to the official DGS-Pay API docs."#;

const INTEGRATION: &str = r#"🚀 **Getting Started with Integration**

**Step 1: Get Credentials**
1. Create an account at DGS-Pay
2. Navigate to API Credentials
3. Get your account number and client secret

**Step 2: Get Your Token**
```
POST /api-v2/token/sandbox
```
Use sandbox for testing, live for production.

**Step 3: Make Your First Payment**
Use `PAYIN_MOBILE` to start collecting mobile money payments.

**Step 4: Setup Webhooks**
Configure your callback URL to receive payment status updates.

**Step 5: Go Live**
- Test thoroughly in sandbox
- Switch to live environment
- Use live credentials

**Development Tips:**
- Start with sandbox environment
- Test error scenarios
- Implement proper error handling
- Use unique references for each transaction

Need help with a specific step? Just ask!"#;

const CURRENCIES: &str = r#"💱 **Supported Currencies**

DGS-Pay supports the following ISO 4217 currency codes:

**Currencies:**
- `RWF` - Rwandan Franc
- `UGX` - Ugandan Shilling
- `KES` - Kenyan Shilling

**Usage:**
Include the currency code in your payment request:

```json
{
  "pay_info": {
    "currency": "RWF",
    "amount": 550
  }
}
```

**Important:** Always use the correct currency code for the customer's country and payment method to ensure successful processing."#;

const COUNTRIES: &str = r#"🌍 **Supported Countries**

DGS-Pay supports mobile money in these countries:

| Country | Code | Mobile Money Providers |
|---------|------|------------------------|
| Rwanda | RW (250) | MTN, Airtel |
| Uganda | UG (256) | MTN, Airtel |
| Kenya | KE (254) | M-Pesa (Vodafone) |
| Nigeria | NG (234) | MTN, Airtel |

**Country Codes:**
Use the international country code in requests:
- Rwanda: `250`
- Uganda: `256`
- Kenya: `254`
- Nigeria: `234`

**Example:**
```json
{
  "from": {
    "country_code": "250"
  }
}
```"#;

const FEES: &str = r#"💰 **Transaction Fees**

Fees are included in the API response:

**Example Response:**
```json
{
  "amount": 550,
  "currency": "RWF",
  "fee": 39,
  "net_amount": 511.5
}
```

**Fee Fields:**
- `amount` - Total transaction amount
- `fee` - Transaction fee charged
- `net_amount` - Amount received after fees (amount - fee)

**Fee Structure:**
Fees vary by:
- Payment type (mobile money, card, bank)
- Currency
- Amount
- Local vs International

For detailed fee schedules, please refer to your DGS-Pay account dashboard or contact support."#;

const TESTING: &str = r#"🧪 **Testing with Sandbox**

**Sandbox Environment:**
Base URL: `https://pay.digitalservicescenter.rw/api-v2`
Use `/api-v2/token/sandbox` to get sandbox tokens.

**Simulation Mode:**
Use the `simulation` object to test payment flows:

```json
{
  "simulation": {
    "context": "auth_pin",
    "response": "approved"
  }
}
```

**Simulation Response Options:**
- `approved` - Simulate successful payment
- `declined` - Simulate failed payment
- `pending` - Simulate pending authorization

**Testing Best Practices:**
1. Use unique references for each test
2. Test both success and failure scenarios
3. Verify webhook callbacks are received
4. Test token refresh logic
5. Validate all required fields

⚠️ Never use real customer data in sandbox. Always use test data!"#;

const SECURITY: &str = r#"🔒 **Security Best Practices**

**API Security:**
- Never expose your `client_secret` in frontend code
- Always use HTTPS for all API calls
- Store secrets securely (environment variables, secret managers)
- Rotate your secrets regularly

**Webhook Security:**
- Always verify `HTTP_DGS_WEBHOOK_SECRET` header
- Implement request signature verification if available
- Use HTTPS for your callback URLs
- Validate all webhook data before processing

**Application Security:**
- Implement rate limiting on your endpoints
- Sanitize and validate all user inputs
- Use parameterized queries to prevent SQL injection
- Implement proper authentication on your webhook endpoints

**Example (Node.js):**
```javascript
// Never hardcode secrets in frontend code
const clientSecret = process.env.CLIENT_SECRET;
```"#;
