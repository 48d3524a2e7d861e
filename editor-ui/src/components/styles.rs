pub const TOOLBAR_STYLES: &str = r#"
/* Theme */
:root {
    --toolbar-bg: #ffffff;
    --toolbar-border: #e3e3e3;
    --text-primary: #1f2328;
    --text-secondary: #6b7280;
    --accent-bg: #4630eb;
    --accent-text: #ffffff;
    --hover-bg: #f3f4f6;
    --menu-bg: #ffffff;
    --scrim-bg: rgba(0, 0, 0, 0.5);
    --error-text: #dc2626;
    --radius-sm: 3px;
    --radius-md: 6px;
}

[data-theme="dark"] {
    --toolbar-bg: #1c1e21;
    --toolbar-border: #2b2e33;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --accent-bg: #5b4cf5;
    --hover-bg: #25282d;
    --menu-bg: #25282d;
    --scrim-bg: rgba(0, 0, 0, 0.72);
}

/* Shell */
.toolbar-shell {
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
    height: 60px;
    border-bottom: 1px solid var(--toolbar-border);
    background: var(--toolbar-bg);
    color: var(--text-primary);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

.toolbar-title-shell {
    display: flex;
    flex-direction: row;
    align-items: center;
    flex: 1;
    min-width: 0;
    overflow: hidden;
}

.editor-toolbar-logo {
    width: 36px;
    height: auto;
    margin: 0 .5em 0 .75em;
}

.editor-toolbar-buttons {
    display: flex;
    flex-direction: row;
    align-items: center;
    position: relative;
    z-index: 5;
}

.editor-toolbar-save {
    min-width: 100px;
}

/* Buttons */
.button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.4em;
    margin: 0 0.5em;
    padding: 0.5em 1em;
    border: 1px solid var(--toolbar-border);
    border-radius: var(--radius-md);
    background: transparent;
    color: var(--text-primary);
    font-weight: 600;
    cursor: pointer;
}

.button:disabled {
    opacity: 0.5;
    cursor: default;
}

.button-accent {
    background: var(--accent-bg);
    border-color: var(--accent-bg);
    color: var(--accent-text);
}

.button-primary {
    background: var(--text-primary);
    color: var(--toolbar-bg);
}

.button-spinner {
    width: 12px;
    height: 12px;
    border: 2px solid currentColor;
    border-right-color: transparent;
    border-radius: 50%;
    animation: button-spin 0.8s linear infinite;
}

@keyframes button-spin {
    to { transform: rotate(360deg); }
}

.icon-button {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-width: 48px;
    padding: 0 0.5em;
    border: none;
    background: transparent;
    color: var(--text-secondary);
    fill: currentColor;
    cursor: pointer;
}

.icon-button:hover:not(:disabled) {
    color: var(--text-primary);
}

.icon-button:disabled {
    opacity: 0.4;
    cursor: default;
}

.icon-button-label {
    font-size: 11px;
    margin-top: 4px;
}

@media (max-width: 720px) {
    .icon-button.responsive .icon-button-label {
        display: none;
    }
}

/* Title */
.editor-title {
    display: flex;
    flex-direction: column;
    min-width: 0;
}

.editor-title-row {
    display: flex;
    align-items: center;
    gap: 0.5em;
}

.editor-title-name {
    font-size: 1.1em;
    font-weight: 600;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.editor-title-description {
    font-size: 0.85em;
    color: var(--text-secondary);
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.editor-title-status {
    font-size: 0.75em;
    color: var(--text-secondary);
    display: flex;
    gap: 0.75em;
}

.link-button {
    padding: 0;
    border: none;
    background: none;
    color: var(--accent-bg);
    font: inherit;
    cursor: pointer;
}

.import-badge {
    font-size: 0.7em;
    padding: 1px 6px;
    border-radius: var(--radius-sm);
    background: var(--hover-bg);
    color: var(--text-secondary);
}

/* Search */
.search-field {
    width: 180px;
    padding: 0.4em 0.6em;
    border: 1px solid var(--toolbar-border);
    border-radius: var(--radius-md);
    background: var(--toolbar-bg);
    color: var(--text-primary);
}

/* User menu */
.user-menu {
    position: relative;
    margin: 0 0.75em;
}

.user-avatar {
    width: 32px;
    height: 32px;
    border-radius: 50%;
    border: none;
    background: var(--hover-bg);
    color: var(--text-primary);
    font-weight: 600;
    cursor: pointer;
    overflow: hidden;
    padding: 0;
}

.user-avatar img {
    width: 100%;
    height: 100%;
}

.user-menu-panel {
    position: absolute;
    right: 0;
    top: 40px;
    min-width: 200px;
    display: flex;
    flex-direction: column;
    padding: 0.5em 0;
    background: var(--menu-bg);
    border: 1px solid var(--toolbar-border);
    border-radius: var(--radius-md);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.16);
}

.user-menu-item {
    padding: 0.5em 1em;
    border: none;
    background: none;
    color: var(--text-primary);
    text-align: left;
    text-decoration: none;
    font: inherit;
    cursor: pointer;
}

.user-menu-item:hover {
    background: var(--hover-bg);
}

.user-menu-header {
    padding: 0.25em 1em 0.5em;
    color: var(--text-secondary);
    border-bottom: 1px solid var(--toolbar-border);
}

/* Modals */
.modal-scrim {
    position: fixed;
    inset: 0;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--scrim-bg);
}

.modal-dialog {
    width: min(90vw, 420px);
    padding: 1.5em;
    display: flex;
    flex-direction: column;
    gap: 0.75em;
    background: var(--toolbar-bg);
    color: var(--text-primary);
    border-radius: var(--radius-md);
}

.modal-dialog h2 {
    margin: 0;
    font-size: 1.2em;
}

.modal-dialog input,
.modal-dialog textarea {
    padding: 0.5em;
    border: 1px solid var(--toolbar-border);
    border-radius: var(--radius-sm);
    background: transparent;
    color: var(--text-primary);
    font: inherit;
}

.modal-error {
    color: var(--error-text);
    font-size: 0.8em;
}

.modal-actions {
    display: flex;
    justify-content: flex-end;
}
"#;
