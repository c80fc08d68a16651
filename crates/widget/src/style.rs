/// Widget stylesheet, injected as one `<style>` element inside the shadow
/// root. The shadow boundary keeps these rules from leaking into the host
/// page and host rules from leaking in.
pub const STYLESHEET: &str = r#"
:host {
    all: initial;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}

.ss-launcher {
    position: fixed;
    right: 24px;
    bottom: 24px;
    width: 56px;
    height: 56px;
    border: none;
    border-radius: 50%;
    background: #2563eb;
    color: #ffffff;
    font-size: 24px;
    line-height: 56px;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
    z-index: 2147483000;
}

.ss-panel {
    position: fixed;
    right: 24px;
    bottom: 92px;
    width: 340px;
    height: 480px;
    display: none;
    flex-direction: column;
    border-radius: 12px;
    background: #ffffff;
    box-shadow: 0 8px 28px rgba(0, 0, 0, 0.3);
    overflow: hidden;
    z-index: 2147483000;
}

.ss-panel.open {
    display: flex;
}

.ss-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 16px;
    background: #2563eb;
    color: #ffffff;
    font-size: 15px;
    font-weight: 600;
}

.ss-close {
    border: none;
    background: none;
    color: #ffffff;
    font-size: 20px;
    line-height: 1;
    cursor: pointer;
    padding: 0;
}

.ss-log {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 12px;
    overflow-y: auto;
    background: #f8fafc;
}

.ss-msg {
    max-width: 82%;
    padding: 8px 12px;
    border-radius: 12px;
    font-size: 14px;
    line-height: 1.45;
    white-space: pre-wrap;
    overflow-wrap: break-word;
}

.ss-user {
    align-self: flex-end;
    background: #2563eb;
    color: #ffffff;
}

.ss-bot {
    align-self: flex-start;
    background: #e2e8f0;
    color: #0f172a;
}

.ss-bot a {
    color: #1d4ed8;
    text-decoration: underline;
}

.ss-error {
    align-self: flex-start;
    background: #fee2e2;
    color: #991b1b;
}

.ss-citation {
    margin-top: 6px;
    font-size: 12px;
    color: #475569;
}

.ss-typing span {
    display: inline-block;
    width: 6px;
    height: 6px;
    margin-right: 3px;
    border-radius: 50%;
    background: #64748b;
    animation: ss-blink 1s infinite both;
}

.ss-typing span:nth-child(2) {
    animation-delay: 0.2s;
}

.ss-typing span:nth-child(3) {
    animation-delay: 0.4s;
}

@keyframes ss-blink {
    0%, 80%, 100% { opacity: 0.25; }
    40% { opacity: 1; }
}

.ss-composer {
    display: flex;
    align-items: flex-end;
    gap: 8px;
    padding: 10px 12px;
    border-top: 1px solid #e2e8f0;
    background: #ffffff;
}

.ss-input {
    flex: 1;
    resize: none;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    padding: 8px 10px;
    font-size: 14px;
    font-family: inherit;
    line-height: 1.4;
    max-height: 120px;
    overflow-y: auto;
}

.ss-send {
    border: none;
    border-radius: 8px;
    padding: 8px 14px;
    background: #2563eb;
    color: #ffffff;
    font-size: 14px;
    font-weight: 600;
    cursor: pointer;
}

.ss-send:disabled {
    opacity: 0.5;
    cursor: default;
}
"#;
