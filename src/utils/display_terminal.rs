//! 서비스 레지스트리 초기화 과정을 로그로 출력하는 함수들

use log::info;

pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    info!("╔{}╗", border);
    info!("║{:^49}║", title);
    info!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    info!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    info!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    info!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repos: usize, services: usize) {
    print_boxed_title("SERVICE REGISTRY INITIALIZED");
    info!("   📦 Repositories: {}", repos);
    info!("   🔧 Services: {}", services);
    info!("   🚀 Total Components: {}", repos + services);
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    info!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
