pub const PAGE: &str = "min-h-screen w-full bg-cover bg-top px-4 pb-24 pt-4";
pub const SECTION_CARD: &str = "mb-[1.88rem] rounded-2xl bg-white px-4 pb-2 pt-4";
pub const SECTION_TITLE: &str = "flex items-center justify-between text-xs";
pub const GAME_SECTION: &str = "game-section mb-[1.88rem] flex items-center justify-center";
pub const LOTTERY_TIMES_CHIP: &str = "like-button flex items-center justify-center rounded-[6.25rem] bg-white bg-opacity-60 px-[1.5rem] py-[0.25rem]";
pub const TASK_ROW: &str = "flex items-center justify-between border-b border-gray-100 py-3 last:border-b-0";
pub const TASK_NAME: &str = "text-sm font-medium text-gray-900";
pub const TASK_EXTRA: &str = "mt-0.5 text-xs text-gray-400";
pub const TASK_REWARD: &str = "ml-2 shrink-0 text-xs text-orange-500";
pub const TASK_BUTTON: &str = "ml-3 shrink-0 rounded-full px-4 py-1.5 text-xs font-semibold";
pub const TASK_BUTTON_DEFAULT: &str = "bg-blue-500 text-white active:bg-blue-600";
pub const TASK_BUTTON_CLAIM: &str = "bg-orange-500 text-white active:bg-orange-600";
pub const TASK_BUTTON_DISABLED: &str = "bg-gray-200 text-gray-400";
pub const STICKY_BUTTONS: &str = "fixed right-0 top-1/3 z-20 flex flex-col gap-2";
pub const STICKY_BUTTON: &str = "rounded-l-full bg-black/60 py-1.5 pl-3 pr-2 text-xs text-white";
pub const SHEET_MASK: &str = "fixed inset-0 z-30 bg-black/50";
pub const SHEET_BODY: &str = "fixed inset-x-0 bottom-0 z-40 max-h-[70vh] overflow-y-auto rounded-t-2xl bg-white p-4";
pub const SHEET_HEADER: &str = "mb-3 flex items-center justify-between";
pub const SHEET_TITLE: &str = "text-base font-semibold text-gray-900";
pub const SHEET_CLOSE: &str = "p-1 text-sm text-gray-400";
pub const MODAL_MASK: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/60";
pub const MODAL_BODY: &str = "mx-8 w-full max-w-xs rounded-2xl bg-white p-5 text-center";
pub const MODAL_TITLE: &str = "text-lg font-bold text-gray-900";
pub const MODAL_IMAGE: &str = "mx-auto my-3 h-24 w-24 object-contain";
pub const MODAL_DESC: &str = "text-xs text-gray-500";
pub const MODAL_BUTTON: &str = "mt-4 w-full rounded-full bg-orange-500 py-2.5 text-sm font-semibold text-white active:bg-orange-600";
pub const REDEEM_CODE: &str = "mt-3 flex items-center justify-center gap-2 rounded-lg bg-gray-100 px-3 py-2 text-sm text-gray-700";
pub const EMPTY: &str = "flex flex-col items-center justify-center py-10 text-sm text-gray-400";
pub const LOAD_MORE: &str = "mx-auto my-3 block text-center text-xs text-gray-400";
pub const MORE_ACTIVITY_ROW: &str = "flex items-center gap-3 border-b border-gray-100 py-3 last:border-b-0";
pub const MORE_ACTIVITY_IMG: &str = "h-12 w-12 rounded-lg object-cover";
pub const SKELETON_BLOCK: &str = "mb-4 animate-pulse rounded-2xl bg-gray-200";
pub const NOT_FOUND: &str = "flex min-h-screen flex-col items-center justify-center text-gray-500";
pub const UPGRADE_BANNER: &str = "fixed inset-x-4 top-4 z-50 rounded-xl bg-white p-4 text-center shadow-lg";
