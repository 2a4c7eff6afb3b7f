/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口类型
pub use internal::batch_download::structs::batch_controller::BatchController;
pub use internal::batch_download::structs::batch_downloader::BatchDownloader;

/// 对外提供响应式属性基础能力，不能限制死在下载器里，以防有人自己要用
pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}

pub mod batch_download {
    use crate::internal;
    // 结构体模型
    pub use internal::batch_download::structs::control_command::*;
    pub use internal::batch_download::structs::download_item::*;
    pub use internal::batch_download::structs::duration_policy::*;
    pub use internal::batch_download::structs::reveal_order::*;
    pub use internal::batch_download::structs::sim_config::*;
    pub use internal::batch_download::structs::sim_error::*;
    // 调度器：响应式状态束（以 lib 为中心，此处统一导出）
    pub use internal::batch_download::structs::reactive_state::*;

    pub mod hooks {
        pub use crate::internal::batch_download::traits::hooks::*;
    }
}
