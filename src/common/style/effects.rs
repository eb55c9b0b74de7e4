pub const EFFECT_STYLES: &str = r#"
/* Star field */
.stars-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: white;
  animation: twinkle 3s ease-in-out infinite;
}

.star-small {
  width: 1px;
  height: 1px;
}

.star-medium {
  width: 2px;
  height: 2px;
}

.star-large {
  width: 3px;
  height: 3px;
  box-shadow: 0 0 6px rgba(255, 255, 255, 0.8);
}

@keyframes twinkle {
  0%, 100% { opacity: 0.3; }
  50% { opacity: 1; }
}

/* Drifting clouds */
.cloud-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.cloud {
  position: absolute;
  border-radius: 50%;
  filter: blur(6px);
  animation: drift linear infinite;
}

@keyframes drift {
  0% { margin-left: -10%; }
  50% { margin-left: 10%; }
  100% { margin-left: -10%; }
}

/* Hero decoration */
.floating-shapes {
  position: absolute;
  inset: 0;
  z-index: 1;
  pointer-events: none;
}

.floating-circle {
  position: absolute;
  width: 180px;
  height: 180px;
  border-radius: 50%;
  background: var(--gradient-dream);
  opacity: 0.25;
  animation: float ease-in-out infinite;
}

.floating-circle:nth-child(1) { top: 10%; left: 8%; }
.floating-circle:nth-child(2) { top: 55%; right: 10%; }
.floating-circle:nth-child(3) { bottom: 5%; left: 40%; }

@keyframes float {
  0%, 100% { transform: translateY(0) scale(1); }
  50% { transform: translateY(-30px) scale(1.05); }
}

/* Button ripple */
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.6);
  transform: scale(0);
  animation: ripple-grow 0.6s linear;
  pointer-events: none;
}

@keyframes ripple-grow {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

/* Confetti */
.confetti-layer {
  position: fixed;
  inset: 0;
  z-index: 9998;
  pointer-events: none;
}

.confetti-dot {
  position: fixed;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  top: -20px;
  opacity: 0.8;
  animation: fall linear forwards;
}

@keyframes fall {
  0% {
    transform: translateY(0) rotate(0deg);
    opacity: 1;
  }
  100% {
    transform: translateY(100vh) rotate(360deg);
    opacity: 0;
  }
}

/* Notifications */
.notification-tray {
  position: fixed;
  top: 20px;
  right: 20px;
  z-index: 9999;
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.notification {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  padding: var(--space-md) var(--space-lg);
  border-radius: var(--border-radius);
  border: 1px solid rgba(255, 255, 255, 0.3);
  box-shadow: var(--shadow-strong);
  backdrop-filter: blur(10px);
  color: var(--text-inverse);
  animation: slide-in 0.3s ease, fade-out 0.3s ease 3s forwards;
}

.notification-success {
  background: var(--gradient-dream);
  color: var(--text-primary);
}

.notification-error {
  background: var(--error);
}

.notification-icon {
  font-weight: 700;
}

@keyframes slide-in {
  from {
    transform: translateX(100%);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

@keyframes fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}
"#;
