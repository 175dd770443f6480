pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--accent-primary);
  background-color: transparent;
  color: var(--text-primary);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--accent-primary);
  color: var(--background);
}

.btn-primary:hover {
  background-color: var(--button-primary-hover);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* Chips */
.chip {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--accent-muted);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 0.875rem;
}

.chip.active {
  background-color: var(--accent-primary);
  border-color: var(--accent-primary);
  color: var(--background);
}

.chip.highlight {
  border-color: var(--accent-secondary);
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-input, .form-textarea {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  border: 1px solid var(--accent-muted);
  background-color: rgba(var(--background-rgb), 0.6);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus, .form-textarea:focus {
  outline: 2px solid var(--accent-primary);
}

/* kept out of sight of people, not of bots */
.form-honeypot {
  position: absolute;
  left: -10000px;
  width: 1px;
  height: 1px;
  overflow: hidden;
}

.star-badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  font-size: 0.8rem;
  color: var(--accent-secondary);
}
"#;
